use serde::Serialize;

pub const BASE_PARTICLE_COUNT: u32 = 200;
pub const EMOJI_LIFETIME_MS: u32 = 1_500;
pub const CELEBRATION_EMOJIS: [&str; 5] = ["🎉", "🚀", "💼", "✨", "🤝"];
pub const HIRE_SOUND_URL: &str = "https://assets.codepen.io/1256430/whistle.mp3";

/// Burst origin as a fraction of the viewport, as the confetti library
/// expects it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// On-screen rectangle of the element that was clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClickRect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn origin_in(&self, viewport_width: f64, viewport_height: f64) -> Origin {
        let (x, y) = self.center();
        Origin {
            x: fraction(x, viewport_width),
            y: fraction(y, viewport_height),
        }
    }
}

/// Where the floating emoji appears. Keyboard activation reports a click
/// `detail` of 0 and a pointer at the viewport corner, so the button centre
/// stands in for it.
pub fn emoji_anchor(detail: i32, pointer: (f64, f64), button: Option<ClickRect>) -> (f64, f64) {
    match button {
        Some(rect) if detail == 0 => rect.center(),
        _ => pointer,
    }
}

fn fraction(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (value / extent).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Options for one call into the confetti library. Field names serialize to
/// the library's camelCase option keys.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_velocity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay: Option<f64>,
    pub origin: Origin,
    pub disable_for_reduced_motion: bool,
}

struct BurstShape {
    ratio_percent: u32,
    spread: u32,
    start_velocity: Option<u32>,
    decay: Option<f64>,
}

const BURST_SHAPES: [BurstShape; 5] = [
    BurstShape {
        ratio_percent: 25,
        spread: 26,
        start_velocity: Some(55),
        decay: None,
    },
    BurstShape {
        ratio_percent: 20,
        spread: 60,
        start_velocity: None,
        decay: None,
    },
    BurstShape {
        ratio_percent: 35,
        spread: 100,
        start_velocity: None,
        decay: Some(0.91),
    },
    BurstShape {
        ratio_percent: 10,
        spread: 120,
        start_velocity: Some(25),
        decay: Some(0.92),
    },
    BurstShape {
        ratio_percent: 10,
        spread: 120,
        start_velocity: Some(45),
        decay: None,
    },
];

pub fn confetti_bursts(origin: Origin) -> Vec<ConfettiBurst> {
    BURST_SHAPES
        .iter()
        .map(|shape| ConfettiBurst {
            particle_count: BASE_PARTICLE_COUNT * shape.ratio_percent / 100,
            spread: shape.spread,
            start_velocity: shape.start_velocity,
            decay: shape.decay,
            origin,
            disable_for_reduced_motion: true,
        })
        .collect()
}

/// Whatever actually draws particles. The browser build forwards to
/// `window.confetti`.
pub trait ConfettiSink {
    fn fire(&mut self, burst: &ConfettiBurst);
}

pub fn celebrate(sink: &mut impl ConfettiSink, origin: Origin) -> usize {
    let bursts = confetti_bursts(origin);
    for burst in &bursts {
        sink.fire(burst);
    }
    bursts.len()
}

/// Maps a uniform sample in `[0, 1)` onto the emoji set.
pub fn pick_emoji(sample: f64) -> &'static str {
    let last = CELEBRATION_EMOJIS.len() - 1;
    let index = if sample.is_finite() && sample > 0.0 {
        ((sample * CELEBRATION_EMOJIS.len() as f64) as usize).min(last)
    } else {
        0
    };
    CELEBRATION_EMOJIS[index]
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingEmoji {
    pub id: u64,
    pub glyph: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Keyed list of emoji currently floating over the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmojiOverlay {
    next_id: u64,
    items: Vec<FloatingEmoji>,
}

impl EmojiOverlay {
    pub fn spawn(&mut self, glyph: &'static str, x: f64, y: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(FloatingEmoji { id, glyph, x, y });
        id
    }

    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[FloatingEmoji] {
        &self.items
    }
}
