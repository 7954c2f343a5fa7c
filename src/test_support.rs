use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use actix_web::{App, HttpResponse, HttpServer, web};
use actix_web::http::StatusCode;

/// Starts a stand-in for ViaCEP answering every `/ws/{cep}/json/` request
/// with `status` and `body`. Returns its base URL.
///
/// The server runs on its own thread and actix system, and lives until the
/// test process exits.
pub fn start_upstream(status: StatusCode, body: &'static str) -> String {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut sys = actix_rt::System::new("upstream-stub");
        sys.block_on(async move {
            let server = HttpServer::new(move || {
                App::new()
                    .route("/ws/{cep}/json/", web::get().to(move || async move {
                        HttpResponse::build(status)
                            .content_type("application/json; charset=utf-8")
                            .body(body)
                    }))
            })
            .workers(1)
            .bind("127.0.0.1:0")
            .expect("Couldn't bind upstream stub");

            tx.send(server.addrs()[0])
                .expect("Test thread is gone");
            server.run().await
        })
        .expect("Upstream stub failed");
    });

    let addr = rx.recv().expect("Upstream stub did not start");
    format!("http://{}", addr)
}

/// Base URL of a local port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Couldn't bind free port");
    let addr = listener.local_addr().expect("Couldn't read local address");
    drop(listener);
    format!("http://{}", addr)
}
