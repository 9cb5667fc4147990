/// The slice of tweening the sketches actually use: tagged one-shot
/// cues on a shared clock, and linear alpha ramps. Everything advances
/// by frame delta time inside the single update callback.

#[derive(Debug, Clone, Copy)]
struct Cue {
    at: f32,
    tag: u32,
    fired: bool,
}

/// A schedule of one-shot cues. `tick` returns the tags whose time has
/// come this frame, in schedule order; each fires exactly once.
#[derive(Debug, Default)]
pub struct Timeline {
    elapsed: f32,
    cues: Vec<Cue>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cue(&mut self, at: f32, tag: u32) {
        self.cues.push(Cue {
            at,
            tag,
            fired: false,
        });
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time of the last cue, or 0 for an empty timeline.
    pub fn end(&self) -> f32 {
        self.cues.iter().map(|cue| cue.at).fold(0.0, f32::max)
    }

    pub fn finished(&self) -> bool {
        self.cues.iter().all(|cue| cue.fired)
    }

    pub fn tick(&mut self, dt: f32) -> Vec<u32> {
        self.elapsed += dt;
        let elapsed = self.elapsed;
        let mut fired: Vec<&mut Cue> = self
            .cues
            .iter_mut()
            .filter(|cue| !cue.fired && cue.at <= elapsed)
            .collect();
        fired.sort_by(|a, b| a.at.total_cmp(&b.at));
        fired
            .into_iter()
            .map(|cue| {
                cue.fired = true;
                cue.tag
            })
            .collect()
    }

    /// Restarts the clock and re-arms every cue.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        for cue in &mut self.cues {
            cue.fired = false;
        }
    }
}

/// A linear alpha ramp: holds `from` until `start`, reaches `to` at
/// `start + duration`, and stays there.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    pub start: f32,
    pub duration: f32,
    pub from: f32,
    pub to: f32,
}

impl Fade {
    pub fn new(start: f32, duration: f32, from: f32, to: f32) -> Self {
        Self {
            start,
            duration,
            from,
            to,
        }
    }

    pub fn value(&self, t: f32) -> f32 {
        if t <= self.start {
            self.from
        } else if t >= self.start + self.duration {
            self.to
        } else {
            let progress = (t - self.start) / self.duration;
            self.from + (self.to - self.from) * progress
        }
    }

    pub fn done(&self, t: f32) -> bool {
        t >= self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_fire_once_in_schedule_order() {
        let mut timeline = Timeline::new();
        timeline.cue(1.0, 10);
        timeline.cue(0.5, 20);
        assert!(timeline.tick(0.25).is_empty());
        assert_eq!(timeline.tick(1.0), vec![20, 10]);
        assert!(timeline.tick(1.0).is_empty());
        assert!(timeline.finished());
    }

    #[test]
    fn restart_rearms_cues() {
        let mut timeline = Timeline::new();
        timeline.cue(0.1, 1);
        assert_eq!(timeline.tick(0.2), vec![1]);
        timeline.restart();
        assert!(!timeline.finished());
        assert_eq!(timeline.tick(0.2), vec![1]);
    }

    #[test]
    fn fade_ramps_linearly_between_endpoints() {
        let fade = Fade::new(1.0, 2.0, 1.0, 0.0);
        assert_eq!(fade.value(0.0), 1.0);
        assert_eq!(fade.value(2.0), 0.5);
        assert_eq!(fade.value(5.0), 0.0);
        assert!(fade.done(3.0));
        assert!(!fade.done(2.9));
    }
}
