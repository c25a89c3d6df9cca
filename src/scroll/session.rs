//! Auto-scroll session core: speed policy, pause/resume state machine and
//! per-frame advancement. Deliberately free of `web-sys` so native tests can
//! drive it through a mock [`ScrollHost`]; the browser side lives in the
//! parent module.

// --- Rates & Thresholds ------------------------------------------------------

/// Scroll rate while a region's focus area dominates the viewport (px/s).
pub const SPEED_FAST: f64 = 220.0;
/// Scroll rate while caption text is in the readable band (px/s).
pub const SPEED_SLOW: f64 = 36.0;
/// Scroll rate when neither band applies (px/s).
pub const SPEED_NORMAL: f64 = 80.0;

/// Slack allowed between viewport bottom and content bottom when deciding
/// the journey has reached the end.
pub const BOTTOM_TOLERANCE_PX: f64 = 2.0;

// Viewport-fraction thresholds for the speed policy.
const FOCUS_TOP_MAX: f64 = 0.50;
const FOCUS_BOTTOM_MIN: f64 = 0.15;
const DETAIL_TOP_MAX: f64 = 0.80;
const DETAIL_BOTTOM_MIN: f64 = 0.25;

// --- Geometry ----------------------------------------------------------------

/// Vertical bounds of one sub-area, in viewport-relative pixels
/// (negative `top` means the edge is above the viewport).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

/// One content region: a focus sub-area (photo) and a detail sub-area
/// (caption), both measured against the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub focus: Band,
    pub detail: Band,
}

/// Identifier of a scheduled frame callback (the rAF id in the browser).
pub type FrameHandle = i32;

// --- Host Port ---------------------------------------------------------------

/// Everything the session needs from its surroundings: layout measurements,
/// scrolling, frame scheduling and the two visual output signals. The browser
/// implementation is `DomHost`; tests substitute a mock.
pub trait ScrollHost {
    fn viewport_height(&self) -> f64;
    /// Total scrollable content height in pixels.
    fn content_height(&self) -> f64;
    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;
    /// Advance the viewport by `delta_px` (downward positive).
    fn scroll_by(&mut self, delta_px: f64);
    /// Content regions in document order, with current viewport-relative bounds.
    fn regions(&self) -> Vec<RegionBounds>;
    /// Request one future frame callback; returns its handle.
    fn schedule_frame(&mut self) -> FrameHandle;
    /// Cancel a previously scheduled frame callback.
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Make the "continue" affordance visible (journey paused awaiting user).
    fn show_resume_control(&mut self);
    fn hide_resume_control(&mut self);
    /// Fire the out-of-scope engagement side effect that accompanies a start.
    fn engagement_boost(&mut self);
}

// --- Speed Policy ------------------------------------------------------------

/// Pick the scroll rate for the current layout. Regions are scanned in
/// document order; within a region the focus band wins over the detail band,
/// and the first matching region decides.
pub fn compute_speed(regions: &[RegionBounds], viewport_height: f64) -> f64 {
    for r in regions {
        // Focus area prominently visible => coast fast over the visual.
        if r.focus.top < viewport_height * FOCUS_TOP_MAX
            && r.focus.bottom > viewport_height * FOCUS_BOTTOM_MIN
        {
            return SPEED_FAST;
        }
        // Caption in the readable band => slow down for reading.
        if r.detail.top < viewport_height * DETAIL_TOP_MAX
            && r.detail.bottom > viewport_height * DETAIL_BOTTOM_MIN
        {
            return SPEED_SLOW;
        }
    }
    SPEED_NORMAL
}

// --- Session -----------------------------------------------------------------

/// State of one auto-scroll journey. Created in the "not running" state;
/// `start` arms it, `on_frame` advances it, and it resets itself when the
/// viewport bottom reaches the content bottom.
///
/// Invariants: `paused` implies no pending frame; not `running` implies
/// neither `paused` nor a pending frame; at most one frame is pending.
#[derive(Debug, Default)]
pub struct ScrollSession {
    running: bool,
    paused: bool,
    last_frame_ms: Option<f64>,
    pending_frame: Option<FrameHandle>,
}

impl ScrollSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    /// Begin (or restart) the journey. Always leaves exactly one frame
    /// pending: a start while already running cancels the old schedule and
    /// issues a fresh one with a reset frame clock.
    pub fn start(&mut self, host: &mut impl ScrollHost) {
        self.running = true;
        self.paused = false;
        self.last_frame_ms = None;
        host.engagement_boost();
        if let Some(handle) = self.pending_frame.take() {
            host.cancel_frame(handle);
        }
        self.pending_frame = Some(host.schedule_frame());
    }

    /// Suspend on user input. Only meaningful while running and not already
    /// paused; otherwise a no-op.
    pub fn pause_for_user(&mut self, host: &mut impl ScrollHost) {
        if !self.running || self.paused {
            return;
        }
        self.paused = true;
        host.show_resume_control();
        // Cancel the next frame so the loop stalls; a callback already in
        // flight bails out at the paused check in `on_frame`.
        if let Some(handle) = self.pending_frame.take() {
            host.cancel_frame(handle);
        }
    }

    /// Resume after an explicit user confirmation. Only meaningful while
    /// paused; schedules a frame only if none is pending, so repeated calls
    /// cannot double-schedule.
    pub fn resume(&mut self, host: &mut impl ScrollHost) {
        if !self.paused {
            return;
        }
        self.paused = false;
        host.hide_resume_control();
        if self.running && self.pending_frame.is_none() {
            self.last_frame_ms = None;
            self.pending_frame = Some(host.schedule_frame());
        }
    }

    /// One frame of the journey, driven by the host's animation scheduler.
    /// The first frame after a (re)start sees a zero delta.
    pub fn on_frame(&mut self, host: &mut impl ScrollHost, timestamp_ms: f64) {
        let last = self.last_frame_ms.unwrap_or(timestamp_ms);
        let elapsed_s = (timestamp_ms - last) / 1000.0;
        self.last_frame_ms = Some(timestamp_ms);

        // Sole halt point for pause: the fired callback observes the flags
        // and declines to reschedule.
        if !self.running || self.paused {
            self.pending_frame = None;
            return;
        }

        let speed = compute_speed(&host.regions(), host.viewport_height());
        host.scroll_by(speed * elapsed_s);

        // Stop at bottom.
        if host.viewport_height() + host.scroll_offset()
            >= host.content_height() - BOTTOM_TOLERANCE_PX
        {
            self.running = false;
            self.pending_frame = None;
            host.hide_resume_control();
            return;
        }

        self.pending_frame = Some(host.schedule_frame());
    }
}
