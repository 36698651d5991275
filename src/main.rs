use anyhow::Context;

use booklet_app::settings::Settings;
use booklet_app::{discovery, load_catalog, telemetry};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Booklet settings")?;

    telemetry::init(&settings.telemetry.log_format);

    tracing::info!(
        env = ?settings.environment,
        "booklet-app bootstrap starting"
    );

    let catalog = load_catalog(&settings)?;

    tracing::info!(
        books = catalog.book_count(),
        users = catalog.user_count(),
        shareable = discovery::shareable_books(&catalog).len(),
        "catalog ready"
    );

    for book in discovery::featured_books(&catalog, settings.discovery.featured_limit) {
        tracing::debug!(book_id = book.id, title = %book.title, "featured book");
    }

    // One affinity pass over every reader proves the query path end to end.
    for user in catalog.users() {
        let matches =
            discovery::find_similar_users(&catalog, user.id, settings.discovery.min_common);
        tracing::info!(
            user_id = user.id,
            name = %user.name,
            matches = matches.len(),
            "reader connections computed"
        );
    }

    tracing::info!("booklet-app bootstrap complete");
    Ok(())
}
