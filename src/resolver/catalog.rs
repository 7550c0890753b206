// Static itag catalog and its quality ranking
//
// Covers the classic muxed formats served via get_video_info. The profile
// fields exist only to order formats against each other; they are compared
// lexicographically in declaration order, best first.

use lazy_static::lazy_static;

use super::models::ItagId;

/// Quality profile of one itag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItagProfile {
    /// Total pixel area (width x height)
    pub pixels: u32,
    /// Video bitrate in kbit/s
    pub video_kbps: u32,
    /// Audio bitrate in kbit/s
    pub audio_kbps: u32,
    /// Audio sample rate in Hz
    pub audio_hz: u32,
    /// Video codec name, compared as a plain string
    pub video_codec: &'static str,
}

/// Known muxed formats, keyed by itag. Fixed at build time.
pub const ITAGS: &[(ItagId, ItagProfile)] = &[
    (5, ItagProfile { pixels: 400 * 240, video_kbps: 250, audio_kbps: 64, audio_hz: 22_050, video_codec: "h263" }),
    (6, ItagProfile { pixels: 480 * 270, video_kbps: 800, audio_kbps: 64, audio_hz: 22_050, video_codec: "h263" }),
    (13, ItagProfile { pixels: 176 * 144, video_kbps: 500, audio_kbps: 64, audio_hz: 22_050, video_codec: "mp4v" }),
    (17, ItagProfile { pixels: 176 * 144, video_kbps: 2_000, audio_kbps: 24, audio_hz: 22_050, video_codec: "mp4v" }),
    (18, ItagProfile { pixels: 640 * 360, video_kbps: 500, audio_kbps: 96, audio_hz: 44_100, video_codec: "h264" }),
    (22, ItagProfile { pixels: 1280 * 720, video_kbps: 2_900, audio_kbps: 192, audio_hz: 44_100, video_codec: "h264" }),
    (34, ItagProfile { pixels: 640 * 360, video_kbps: 500, audio_kbps: 128, audio_hz: 44_100, video_codec: "h264" }),
    (35, ItagProfile { pixels: 854 * 480, video_kbps: 1_000, audio_kbps: 128, audio_hz: 44_100, video_codec: "h264" }),
    (36, ItagProfile { pixels: 320 * 240, video_kbps: 170, audio_kbps: 38, audio_hz: 44_100, video_codec: "mp4v" }),
    (37, ItagProfile { pixels: 1920 * 1080, video_kbps: 4_300, audio_kbps: 192, audio_hz: 44_100, video_codec: "h264" }),
    (38, ItagProfile { pixels: 4096 * 3072, video_kbps: 5_000, audio_kbps: 192, audio_hz: 44_100, video_codec: "h264" }),
    (43, ItagProfile { pixels: 640 * 360, video_kbps: 500, audio_kbps: 128, audio_hz: 44_100, video_codec: "vp8" }),
    (44, ItagProfile { pixels: 854 * 480, video_kbps: 1_000, audio_kbps: 128, audio_hz: 44_100, video_codec: "vp8" }),
    (45, ItagProfile { pixels: 1280 * 720, video_kbps: 2_000, audio_kbps: 192, audio_hz: 44_100, video_codec: "vp8" }),
    (46, ItagProfile { pixels: 1920 * 1080, video_kbps: 2_700, audio_kbps: 192, audio_hz: 44_100, video_codec: "vp8" }),
];

lazy_static! {
    /// Every known itag, ordered strictly from best to worst quality.
    pub static ref ITAGS_BY_QUALITY: Vec<ItagId> = {
        let mut table = ITAGS.to_vec();
        table.sort_by(|(_, a), (_, b)| b.cmp(a));
        table.into_iter().map(|(itag, _)| itag).collect()
    };
}

/// Look up the profile for an itag, if it is a known format.
pub fn profile(itag: ItagId) -> Option<&'static ItagProfile> {
    ITAGS
        .iter()
        .find(|(id, _)| *id == itag)
        .map(|(_, profile)| profile)
}

pub fn is_known(itag: ItagId) -> bool {
    profile(itag).is_some()
}
