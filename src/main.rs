mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod utils;

use actix_web::{App, HttpServer, web};

use state::Pizzeria;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let pizzeria = web::Data::new(Pizzeria::new());
    println!("🍕 Pizzeria prête (données en mémoire, catalogue vide)");

    println!("🚀 Starting server on http://127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(pizzeria.clone())
            .configure(routes::configure_routes)
    })
        .bind(("127.0.0.1", 8080))?
        .run()
        .await
}
