//! Opt-in phase profiling with RAII guards.

use hashbrown::HashMap;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Accumulated cost of one named phase.
#[derive(Debug, Default, Copy, Clone)]
pub struct Profile {
    pub calls: u64,
    pub duration: Duration
}

pub struct Profiler {
    enabled: AtomicBool,
    profiles: Mutex<HashMap<&'static str, Profile>>
}

lazy_static! {
    static ref INSTANCE: Profiler = Profiler::new();
}

impl Profiler {
    fn new() -> Profiler {
        Profiler{
            enabled: AtomicBool::new(false),
            profiles: Mutex::new(HashMap::new())
        }
    }

    /// Returns the singleton instance of Profiler.
    pub fn instance() -> &'static Profiler {
        &INSTANCE
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    /// Returns a ProfilePhase RAII guard that reports its duration back to
    /// this profiler when it goes out of scope. While the profiler is
    /// disabled the guard records nothing and takes no lock, so phases on
    /// the per-sample path stay free.
    pub fn profile(&self, name: &'static str) -> ProfilePhase {
        ProfilePhase{
            profiler: self,
            name,
            start: Instant::now(),
            active: self.enabled.load(Ordering::Relaxed)
        }
    }

    fn record(&self, name: &'static str, duration: Duration) {
        let mut profiles = self.profiles.lock();
        let profile = profiles.entry(name).or_insert_with(Profile::default);
        profile.calls += 1;
        profile.duration += duration;
    }

    /// Look up the accumulated cost of a phase.
    pub fn get(&self, name: &str) -> Option<Profile> {
        self.profiles.lock().get(name).copied()
    }

    pub fn clear(&self) {
        self.profiles.lock().clear();
    }

    /// Write a per-phase summary.
    pub fn print<T: Write>(&self, dest: &mut T) {
        let profiles = self.profiles.lock();
        for (name, profile) in profiles.iter() {
            writeln!(dest, "{:<48} {:>10} calls {:>12?}", name, profile.calls, profile.duration).ok();
        }
    }
}

/// An RAII object timing the span from its creation to its drop.
pub struct ProfilePhase<'a> {
    profiler: &'a Profiler,
    name: &'static str,
    start: Instant,
    // profiler was enabled when this ProfilePhase was created.
    active: bool
}

impl<'a> Drop for ProfilePhase<'a> {
    fn drop(&mut self) {
        if self.active {
            self.profiler.record(self.name, self.start.elapsed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_record_only_while_enabled() {
        let profiler = Profiler::new();
        {
            let _guard = profiler.profile("idle phase");
        }
        assert!(profiler.get("idle phase").is_none());

        profiler.enable();
        {
            let _guard = profiler.profile("hot phase");
        }
        {
            let _guard = profiler.profile("hot phase");
        }
        let profile = profiler.get("hot phase").unwrap();
        assert_eq!(profile.calls, 2);

        let mut out = Vec::new();
        profiler.print(&mut out);
        assert!(String::from_utf8(out).unwrap().contains("hot phase"));
    }
}
