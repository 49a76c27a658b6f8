//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default.
//! Every use is additionally gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a line for every fetch event applied to the UI state.
    pub print_fetch_events: bool,
    /// Emit chart build/teardown messages.
    pub print_chart_lifecycle: bool,
    /// Emit UI interaction logs (check requests, ignored empty input).
    pub print_ui_interactions: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch_events: true,
    print_chart_lifecycle: false,
    print_ui_interactions: true,
    print_shutdown: false,
};
