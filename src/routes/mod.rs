pub mod auth;
pub mod docs;
pub mod health;
pub mod tasks;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::sign_up)
            .service(auth::token)
            .service(auth::verify_token),
    )
    .service(
        web::scope("/tasks")
            .service(tasks::add_task)
            .service(tasks::get_tasks),
    );
}
