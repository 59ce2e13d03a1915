#[macro_use]
extern crate diesel;

mod appointment;
mod board;
mod clinic;
mod database;
mod models;
mod patient;
mod protocol;
mod schema;
mod staff;
mod status;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .data(pool.clone())
            // staff session
            .service(
                web::scope("/staff")
                    .configure(staff::config),
            )
            // patient registry
            .service(
                web::scope("/patient")
                    .configure(patient::config),
            )
            // clinic registry
            .service(
                web::scope("/clinic")
                    .configure(clinic::config),
            )
            // appointments
            .service(
                web::scope("/appointment")
                    .configure(appointment::config),
            )
            // kanban board
            .service(
                web::scope("/board")
                    .configure(board::config),
            )
    })
    .bind(&bind)?
    .run()
    .await
}
