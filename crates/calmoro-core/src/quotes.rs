//! Motivational quotes shown after completed focus sessions.

use rand::Rng;

/// The rotation pool. The first entry doubles as the initial quote before
/// any session completes.
pub const MOTIVATIONAL_QUOTES: [&str; 6] = [
    "Focus on being productive instead of busy.",
    "The key is in not spending time, but in investing it.",
    "Small steps lead to big changes.",
    "Don't watch the clock; do what it does. Keep going.",
    "Your future is created by what you do today, not tomorrow.",
    "Starve your distractions, feed your focus.",
];

/// Pick a quote uniformly at random. Repeats are allowed.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES[rng.gen_range(0..MOTIVATIONAL_QUOTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_returns_pool_member() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let quote = pick(&mut rng);
            assert!(MOTIVATIONAL_QUOTES.contains(&quote));
        }
    }
}
