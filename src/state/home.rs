/// Timer-driven widgets of the homepage
///
/// Each widget advances by explicit `tick(dt)` calls so the app drives
/// them from one `iced::time::every` subscription and tests can step them
/// deterministically.

use std::time::Duration;

/// How often the cursor of the typewriter blinks
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);
/// Time each testimonial stays on screen while auto-playing
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(5);

/// Reveals a headline one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    speed: Duration,
    /// Characters revealed so far
    revealed: usize,
    since_step: Duration,
    cursor_visible: bool,
    since_blink: Duration,
}

impl Typewriter {
    /// `delay` applies before the first character, `speed` between the rest
    pub fn new(text: impl Into<String>, delay: Duration, speed: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            speed,
            revealed: 0,
            since_step: Duration::ZERO,
            cursor_visible: true,
            since_blink: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.since_blink += dt;
        while self.since_blink >= CURSOR_BLINK {
            self.since_blink -= CURSOR_BLINK;
            self.cursor_visible = !self.cursor_visible;
        }

        let total = self.text.chars().count();
        self.since_step += dt;
        while self.revealed < total {
            let wait = if self.revealed == 0 { self.delay } else { self.speed };
            if self.since_step < wait {
                break;
            }
            self.since_step -= wait;
            self.revealed += 1;
        }
    }

    /// The revealed prefix of the text
    pub fn displayed(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.text.chars().count()
    }

    /// Revealed text followed by the cursor, which keeps blinking after
    /// the text is complete
    pub fn line(&self) -> String {
        let cursor = if self.cursor_visible { '|' } else { ' ' };
        format!("{}{}", self.displayed(), cursor)
    }
}

/// Counts from zero up to `end` over `duration`
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: &'static str,
    pub suffix: &'static str,
    end: u32,
    duration: Duration,
    elapsed: Duration,
}

impl StatCounter {
    pub fn new(end: u32, label: &'static str, suffix: &'static str, duration: Duration) -> Self {
        Self {
            label,
            suffix,
            end,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Start counting again from zero
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Linear progress, floored
    pub fn value(&self) -> u32 {
        if self.duration.is_zero() {
            return self.end;
        }
        let progress = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        (progress * self.end as f64).floor() as u32
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }
}

/// Homepage statistics, all counting for two seconds
pub fn default_stats() -> Vec<StatCounter> {
    let duration = Duration::from_secs(2);
    vec![
        StatCounter::new(5000, "Designs Created", "+", duration),
        StatCounter::new(500, "Happy Clients", "+", duration),
        StatCounter::new(10, "Master Artists", "+", duration),
        StatCounter::new(99, "Satisfaction Rate", "%", duration),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Stars out of five
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "Tattoo Enthusiast",
        content: "InkAI Studio transformed my vague idea into an absolutely stunning design. The AI understood exactly what I wanted!",
        rating: 5,
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Professional Artist",
        content: "As a tattoo artist, I was skeptical about AI. But this tool has become invaluable for inspiration and client consultations.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Thompson",
        role: "First-time Client",
        content: "The platform made getting my first tattoo so much less intimidating. I could visualize everything before committing.",
        rating: 5,
    },
];

/// Rotating testimonial display, pausable while hovered
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    auto_playing: bool,
    elapsed: Duration,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            auto_playing: true,
            elapsed: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn tick(&mut self, dt: Duration) {
        if !self.auto_playing || self.len == 0 {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= CAROUSEL_INTERVAL {
            self.elapsed -= CAROUSEL_INTERVAL;
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Stop auto-advance (pointer entered) or resume it (pointer left).
    /// Resuming restarts the interval.
    pub fn set_auto_playing(&mut self, auto_playing: bool) {
        self.auto_playing = auto_playing;
        self.elapsed = Duration::ZERO;
    }

    /// Jump to a slide via its indicator
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.elapsed = Duration::ZERO;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "AI Design Generation",
        description: "Revolutionary AI technology creates unique tattoo designs based on your vision and preferences.",
    },
    Feature {
        title: "Master Artists",
        description: "Connect with world-class tattoo artists who bring decades of experience and artistic mastery.",
    },
    Feature {
        title: "Safe Environment",
        description: "Professional studios with the highest safety standards and sterilization protocols.",
    },
];

/// The two typewriter lines of the hero section
pub const HERO_LINES: [&str; 2] = ["Where Art Meets", "Artificial Intelligence"];

/// Everything animated on the homepage, stepped together
#[derive(Debug, Clone)]
pub struct Homepage {
    pub headline: [Typewriter; 2],
    pub stats: Vec<StatCounter>,
    pub carousel: Carousel,
}

impl Homepage {
    pub fn new() -> Self {
        let speed = Duration::from_millis(100);
        Self {
            headline: [
                Typewriter::new(HERO_LINES[0], Duration::from_millis(1000), speed),
                Typewriter::new(HERO_LINES[1], Duration::from_millis(2500), speed),
            ],
            stats: default_stats(),
            carousel: Carousel::new(TESTIMONIALS.len()),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        for line in &mut self.headline {
            line.tick(dt);
        }
        for stat in &mut self.stats {
            stat.tick(dt);
        }
        self.carousel.tick(dt);
    }

    /// Replay the counters when the page comes back into view
    pub fn restart_stats(&mut self) {
        for stat in &mut self.stats {
            stat.restart();
        }
    }

    pub fn testimonial(&self) -> &'static Testimonial {
        &TESTIMONIALS[self.carousel.index() % TESTIMONIALS.len()]
    }
}

impl Default for Homepage {
    fn default() -> Self {
        Self::new()
    }
}
