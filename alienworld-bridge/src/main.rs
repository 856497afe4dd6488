use alienworld_bridge::{app, helpers, subscription, update, view_ui};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("=== alienworld XP starting ===");

    let settings = helpers::load_settings();
    let (width, height) = settings.window_size();
    let window = iced::Size::new(width, height);

    iced::application(
        move || app::boot(settings.clone()),
        update::update,
        view_ui::view,
    )
    .title(view_ui::title)
    .theme(view_ui::theme)
    .subscription(subscription::subscription)
    .window_size(window)
    .run()
}
