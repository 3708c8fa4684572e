// MyVacation services
// Services provide stateless or self-contained functionality: reconciliation, search API access, settings, video embeds.

pub mod reconciler;
pub mod search_client;
pub mod settings_engine;
pub mod video_embed;
