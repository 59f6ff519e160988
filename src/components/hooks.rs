//! Custom hooks shared across components.

use leptos::prelude::*;

/// Page-loaded gate for components holding locally-persisted state.
///
/// Returns a signal that starts `false` and flips to `true` in a post-mount
/// effect, so such components produce no output before client-side state is
/// available and the first visible render already reflects it.
pub fn use_page_loaded() -> ReadSignal<bool> {
    let (loaded, set_loaded) = signal(false);

    // Effects only run on the client, after the component is mounted.
    Effect::new(move |_| {
        set_loaded.set(true);
    });

    loaded
}

/// Generation counter for async reads with a single writer.
///
/// Each read calls [`begin`](Self::begin) to obtain its generation; on
/// completion it checks [`is_current`](Self::is_current) and discards its
/// result when a newer read has begun meanwhile. The last read *started*
/// wins, regardless of completion order.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal, which is
/// cheap to copy (it's just a pointer to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ReadGuard {
    generation: RwSignal<u64>,
}

impl ReadGuard {
    /// Create a guard with no read in flight.
    pub fn new() -> Self {
        Self {
            generation: RwSignal::new(0),
        }
    }

    /// Start a new read, superseding any read still in flight.
    ///
    /// Returns the generation the completion must present to
    /// [`is_current`](Self::is_current).
    pub fn begin(&self) -> u64 {
        self.generation.update(|g| *g += 1);
        self.generation.get_untracked()
    }

    /// Whether a read started with `generation` is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get_untracked() == generation
    }
}

impl Default for ReadGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_read_is_current() {
        let guard = ReadGuard::new();
        let generation = guard.begin();
        assert!(guard.is_current(generation));
    }

    #[test]
    fn test_newer_begin_supersedes_older() {
        let guard = ReadGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_generations_are_monotonic() {
        let guard = ReadGuard::new();
        let mut previous = guard.begin();
        for _ in 0..3 {
            let next = guard.begin();
            assert!(next > previous);
            previous = next;
        }
    }
}
