//! YouTube video id extraction for the preview player.

use url::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const VIDEO_ID_LEN: usize = 11;

/// Extracts the video id from a YouTube watch, share, embed or shorts URL.
///
/// Returns `None` for anything that is not a recognisable YouTube link.
pub fn youtube_video_id(video_url: &str) -> Option<String> {
    let url = Url::parse(video_url.trim()).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");

    let candidate = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" | "music.youtube.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed") | Some("v") | Some("shorts") | Some("live") => {
                    segments.next().map(str::to_string)
                }
                _ => None,
            }
        }
        _ => None,
    }?;

    is_video_id(&candidate).then_some(candidate)
}

/// Autoplaying player URL for the preview dialog.
pub fn embed_url(video_url: &str) -> Option<String> {
    youtube_video_id(video_url).map(|id| format!("{}{}?autoplay=1", EMBED_BASE, id))
}

fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
