use actix_files::Files;
use actix_session::SessionMiddleware;
use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use actix_web::{App, HttpServer, web};

use b2b_wholesale::ADMIN_SESSION_COOKIE;
use b2b_wholesale::media::LocalMediaStore;
use b2b_wholesale::models::config::ServerConfig;
use b2b_wholesale::repository::{DieselRepository, establish_connection_pool};
use b2b_wholesale::routes::{auth, categories, products, shops, upload};

/// How long an admin session stays valid without a new login.
const SESSION_TTL_DAYS: i64 = 7;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(config::Environment::default().separator("__"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = load_config().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);
    let media = LocalMediaStore::new(&config.media);
    let secret_key = Key::derive_from(config.secret_key.as_bytes());
    let media_root = config.media.root.clone();

    log::info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        let session_middleware =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_name(ADMIN_SESSION_COOKIE.to_string())
                .cookie_http_only(true)
                .cookie_same_site(SameSite::Lax)
                .cookie_path("/".to_string())
                .session_lifecycle(
                    PersistentSession::default().session_ttl(Duration::days(SESSION_TTL_DAYS)),
                )
                .build();

        App::new()
            .wrap(session_middleware)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(media.clone()))
            .service(auth::admin_login)
            .service(auth::logout)
            .service(auth::current_session)
            .service(categories::list_categories)
            .service(categories::get_category)
            .service(categories::create_category)
            .service(categories::update_category)
            .service(categories::delete_category)
            .service(products::list_products)
            .service(products::get_product)
            .service(products::create_product)
            .service(products::update_product)
            .service(products::delete_product)
            .service(shops::list_shops)
            .service(shops::create_shop)
            .service(shops::update_shop)
            .service(shops::delete_shop)
            .service(upload::upload_media)
            .service(Files::new("/media", media_root.clone()))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
