use rusty_leagues::args;
use rusty_leagues::controller::browse::{badges, leagues};
use rusty_leagues::controller::catalog::CatalogClient;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    // One client (and so one response cache) shared by every worker.
    let client = Data::new(CatalogClient::new(args.api_base_url.clone()));

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .route("/", web::get().to(index))
            .route("/leagues", web::get().to(leagues))
            .route("/badges", web::get().to(badges))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static").show_files_listing()) // Serve the static files
    })
    .bind(args.bind.as_str())?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = rusty_leagues::view::index::render_index_template("Sports Leagues");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
