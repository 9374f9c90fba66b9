//=========================================================================
// Rooftop Runner: Library Root
//=========================================================================
//
// Side-scrolling endless runner: a player jumps between procedurally
// spaced rooftops that scroll past at a constant speed. Each gap cleared
// scores a point; falling into one ends the run.
//
// Typical usage:
// ```no_run
// use rooftop_runner::EngineBuilder;
// use rooftop_runner::core::config::RunnerConfig;
//
// let config = RunnerConfig::load("runner.ron").unwrap_or_default();
// EngineBuilder::new(config).build().run().ok();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the simulation (player, track, scenery), the session state
// machine, configuration and persistence. It has no window dependency
// and can be driven headless, one `Session::tick` at a time.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop; `engine` wires it to
// the core thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
