use crate::event::ResourceTiming;
use crate::har::{Timings, elapsed_ms};

/// Marks a phase the browser never timed, as opposed to one that took 0 ms.
pub const NOT_MEASURED: f64 = -1.0;

/// Chrome reports untimed phases as `-1` on both ends, which subtracts to
/// exactly zero.
fn measured(duration: f64) -> f64 {
    if duration == 0.0 { NOT_MEASURED } else { duration }
}

/// Per-phase timings of one request.
///
/// `receive` spans data reception, from the end of the response headers to
/// loading-finished, so it is derived from the event timestamps instead of a
/// start/end pair.
pub fn har_timings(
    timing: Option<&ResourceTiming>,
    started_at: f64,
    finished_at: f64,
) -> Timings {
    let Some(t) = timing else {
        return Timings::default();
    };

    Timings {
        blocked: Some(measured(t.dns_start)),
        dns: Some(measured(t.dns_end - t.dns_start)),
        connect: Some(measured(t.connect_end - t.connect_start)),
        send: measured(t.send_end - t.send_start),
        wait: measured(t.receive_headers_end - t.send_end),
        receive: elapsed_ms(started_at, finished_at) - t.receive_headers_end,
        ssl: Some(measured(t.ssl_end - t.ssl_start)),
    }
}
