mod causes;
mod data;
mod location_data;
mod refresh;
mod status_distribution;
mod summary;
mod trends;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(data::init_routes)
            .configure(summary::init_routes)
            .configure(trends::init_routes)
            .configure(location_data::init_routes)
            .configure(causes::init_routes)
            .configure(status_distribution::init_routes),
    )
    .configure(refresh::init_routes);
}
