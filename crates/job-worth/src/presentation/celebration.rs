use serde::Serialize;

/// Celebratory effect a front end may play after showing a report.
///
/// Derived from the total score after scoring has finished. Levels are
/// cumulative: a higher level plays every burst of the levels below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Celebration {
    None,
    Confetti,
    GoldShower,
    Fireworks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BurstOrigin {
    Center,
    /// Repeating bursts from both upper corners, thinning out over the duration.
    SideStreams,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfettiPalette {
    Rainbow,
    Gold,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub delay_ms: u32,
    pub particle_count: u32,
    pub spread_deg: u32,
    pub origin: BurstOrigin,
    pub palette: ConfettiPalette,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}

const CONFETTI_BURSTS: [ConfettiBurst; 2] = [
    ConfettiBurst {
        delay_ms: 0,
        particle_count: 100,
        spread_deg: 70,
        origin: BurstOrigin::Center,
        palette: ConfettiPalette::Rainbow,
        duration_ms: None,
    },
    ConfettiBurst {
        delay_ms: 0,
        particle_count: 50,
        spread_deg: 360,
        origin: BurstOrigin::SideStreams,
        palette: ConfettiPalette::Rainbow,
        duration_ms: Some(3_000),
    },
];

const GOLD_BURSTS: [ConfettiBurst; 1] = [ConfettiBurst {
    delay_ms: 500,
    particle_count: 150,
    spread_deg: 100,
    origin: BurstOrigin::Center,
    palette: ConfettiPalette::Gold,
    duration_ms: None,
}];

const FIREWORK_BURSTS: [ConfettiBurst; 2] = [
    ConfettiBurst {
        delay_ms: 1_000,
        particle_count: 200,
        spread_deg: 55,
        origin: BurstOrigin::Left,
        palette: ConfettiPalette::Default,
        duration_ms: None,
    },
    ConfettiBurst {
        delay_ms: 1_000,
        particle_count: 200,
        spread_deg: 55,
        origin: BurstOrigin::Right,
        palette: ConfettiPalette::Default,
        duration_ms: None,
    },
];

impl Celebration {
    pub fn for_total(total: f64) -> Self {
        if total >= 90.0 {
            Self::Fireworks
        } else if total >= 80.0 {
            Self::GoldShower
        } else if total >= 60.0 {
            Self::Confetti
        } else {
            Self::None
        }
    }

    pub fn bursts(self) -> Vec<ConfettiBurst> {
        let mut bursts = Vec::new();
        if self >= Self::Confetti {
            bursts.extend_from_slice(&CONFETTI_BURSTS);
        }
        if self >= Self::GoldShower {
            bursts.extend_from_slice(&GOLD_BURSTS);
        }
        if self >= Self::Fireworks {
            bursts.extend_from_slice(&FIREWORK_BURSTS);
        }
        bursts
    }

    pub const fn emoji(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Confetti => Some("🎉"),
            Self::GoldShower => Some("🎉✨"),
            Self::Fireworks => Some("🎉✨🎆"),
        }
    }
}
