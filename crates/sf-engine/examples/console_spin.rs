//! Drive one full spin cycle against a console host.
//!
//! Run with `RUST_LOG=debug cargo run -p sf-engine --example console_spin`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sf_core::{IconRef, Prize, PrizeCatalog, Reel, SpinTuning};
use sf_engine::{
    AudioSink, HostPorts, LayoutProbe, ReelSurface, ResultPanel, Scheduler, SettleCurve,
    SpinManager, SpinTrigger,
};
use sf_stage::{Cue, CueAction};

struct ConsoleReel {
    label: &'static str,
    strip: Reel,
}

impl ReelSurface for ConsoleReel {
    fn strip(&self) -> &Reel {
        &self.strip
    }
    fn snap_to(&mut self, offset_px: f64) {
        println!("[{}] snap to {offset_px:.1}px", self.label);
    }
    fn glide_to(&mut self, offset_px: f64, duration_secs: f64, curve: SettleCurve) {
        println!(
            "[{}] glide to {offset_px:.1}px over {duration_secs}s ({})",
            self.label,
            curve.css_timing_function()
        );
    }
}

struct FixedLayout;

impl LayoutProbe for FixedLayout {
    fn icon_height_px(&self) -> f64 {
        150.0
    }
}

#[derive(Default)]
struct QueueScheduler {
    timers: Vec<(u8, f64)>,
}

impl Scheduler for QueueScheduler {
    fn schedule(&mut self, reel_index: u8, delay_secs: f64) {
        self.timers.push((reel_index, delay_secs));
    }
}

struct ConsoleAudio;

impl AudioSink for ConsoleAudio {
    fn apply(&mut self, cue: Cue, action: CueAction) {
        println!("[audio] {:?} {}", action, cue.name());
    }
    fn set_volume(&mut self, volume: f32) {
        println!("[audio] volume {volume}");
    }
}

struct ConsoleTrigger;

impl SpinTrigger for ConsoleTrigger {
    fn set_enabled(&mut self, enabled: bool) {
        println!("[button] {}", if enabled { "armed" } else { "disabled" });
    }
}

struct ConsolePanel;

impl ResultPanel for ConsolePanel {
    fn set_text(&mut self, title: &str, description: &str) {
        println!("[panel] {title} {description}");
    }
    fn reveal(&mut self) {
        println!("[panel] revealed");
    }
    fn hide(&mut self) {
        println!("[panel] hidden");
    }
    fn set_celebrating(&mut self, on: bool) {
        println!("[mascot] {}", if on { "happy" } else { "neutral" });
    }
}

fn main() {
    env_logger::init();

    let catalog = PrizeCatalog::new(vec![
        Prize::new("snack01", "Honey Pork Strips", "Sweet glazed pork strips", IconRef::new("pork")),
        Prize::new("snack02", "Rice Crackers", "Crisp and light", IconRef::new("rice")),
        Prize::new("snack03", "Scallion Biscuits", "Savory and flaky", IconRef::new("scallion")),
    ])
    .expect("static catalog");

    let tuning = SpinTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut reels: Vec<ConsoleReel> = ["reel-0", "reel-1", "reel-2"]
        .into_iter()
        .map(|label| ConsoleReel {
            label,
            strip: Reel::build(&catalog, tuning.pool_len, &mut rng).expect("valid pool"),
        })
        .collect();
    let layout = FixedLayout;
    let mut scheduler = QueueScheduler::default();
    let mut audio = ConsoleAudio;
    let mut trigger = ConsoleTrigger;
    let mut panel = ConsolePanel;

    let mut manager = SpinManager::new(catalog, tuning).expect("valid tuning");

    let mut ports = HostPorts {
        reels: reels.iter_mut().map(|r| r as &mut dyn ReelSurface).collect(),
        layout: &layout,
        scheduler: &mut scheduler,
        audio: &mut audio,
        trigger: &mut trigger,
        panel: &mut panel,
    };

    manager.init_host(&mut ports);
    let plan = manager.spin(&mut ports, &mut rng).expect("idle manager").clone();
    drop(ports);

    println!("\n-- timeline --");
    for event in plan.stage_timeline() {
        println!("{:>6.2}s  {}", event.timestamp_secs, event.stage.type_name());
    }
    println!();

    // Replay the completion timers in firing order
    let mut timers = std::mem::take(&mut scheduler.timers);
    timers.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    for (reel_index, delay) in timers {
        println!("-- {delay}s elapsed, reel {reel_index} timer fired --");
        let mut ports = HostPorts {
            reels: reels.iter_mut().map(|r| r as &mut dyn ReelSurface).collect(),
            layout: &layout,
            scheduler: &mut scheduler,
            audio: &mut audio,
            trigger: &mut trigger,
            panel: &mut panel,
        };
        manager.reel_finished(reel_index, &mut ports);
    }
}
