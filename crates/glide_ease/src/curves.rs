//! The easing curve catalog
//!
//! Every curve shares one calling contract: `f(t, b, c, d)` where `t` is the
//! elapsed time within the duration `d`, `b` is the begin value, and `c` is
//! the total change (`end - begin`). All curves are pure and total for
//! `t` in `[0, d]` with `d > 0`.
//!
//! Each family comes in four flavors: `in_*` starts slow, `out_*` starts
//! fast, `in_out_*` is slow at both ends, and `out_in_*` is fast at both
//! ends (an `out_*` half followed by an `in_*` half).

use std::f32::consts::PI;

/// The easing calling contract: `f(t, b, c, d) -> value`.
pub type EaseFn = fn(t: f32, b: f32, c: f32, d: f32) -> f32;

/// Overshoot constant shared by the `back` family.
const BACK_S: f32 = 1.70158;

/// Straight-line interpolation between `b` and `b + c`.
pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

// ============================================================================
// Quadratic
// ============================================================================

pub fn in_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d).powi(2) + b
}

pub fn out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

pub fn in_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t.powi(2) + b
    } else {
        -c / 2.0 * ((t - 1.0) * (t - 3.0) - 1.0) + b
    }
}

pub fn out_in_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_quad(t * 2.0, b, c / 2.0, d)
    } else {
        in_quad(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Cubic
// ============================================================================

pub fn in_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d).powi(3) + b
}

pub fn out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * ((t / d - 1.0).powi(3) + 1.0) + b
}

pub fn in_out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    }
}

pub fn out_in_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_cubic(t * 2.0, b, c / 2.0, d)
    } else {
        in_cubic(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Quartic
// ============================================================================

pub fn in_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d).powi(4) + b
}

pub fn out_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * ((t / d - 1.0).powi(4) - 1.0) + b
}

pub fn in_out_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t.powi(4) + b
    } else {
        -c / 2.0 * ((t - 2.0).powi(4) - 2.0) + b
    }
}

pub fn out_in_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_quart(t * 2.0, b, c / 2.0, d)
    } else {
        in_quart(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Quintic
// ============================================================================

pub fn in_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d).powi(5) + b
}

pub fn out_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * ((t / d - 1.0).powi(5) + 1.0) + b
}

pub fn in_out_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t.powi(5) + b
    } else {
        c / 2.0 * ((t - 2.0).powi(5) + 2.0) + b
    }
}

pub fn out_in_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_quint(t * 2.0, b, c / 2.0, d)
    } else {
        in_quint(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Sinusoidal
// ============================================================================

pub fn in_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

pub fn out_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d * (PI / 2.0)).sin() + b
}

pub fn in_out_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

pub fn out_in_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_sine(t * 2.0, b, c / 2.0, d)
    } else {
        in_sine(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Exponential
// ============================================================================

// The exponential family carries the classic 0.001 endpoint fudge so that
// the curve still lands near b + c despite 2^(-10) not being zero.

pub fn in_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    c * 2.0_f32.powf(10.0 * (t / d - 1.0)) + b - c * 0.001
}

pub fn out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == d {
        return b + c;
    }
    c * 1.001 * (-(2.0_f32.powf(-10.0 * t / d)) + 1.0) + b
}

pub fn in_out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * 2.0_f32.powf(10.0 * (t - 1.0)) + b - c * 0.0005
    } else {
        c / 2.0 * 1.0005 * (-(2.0_f32.powf(-10.0 * (t - 1.0))) + 2.0) + b
    }
}

pub fn out_in_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_expo(t * 2.0, b, c / 2.0, d)
    } else {
        in_expo(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Circular
// ============================================================================

pub fn in_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * ((1.0 - (t / d).powi(2)).sqrt() - 1.0) + b
}

pub fn out_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (1.0 - (t / d - 1.0).powi(2)).sqrt() + b
}

pub fn in_out_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b
    } else {
        let t = t - 2.0;
        c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
    }
}

pub fn out_in_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_circ(t * 2.0, b, c / 2.0, d)
    } else {
        in_circ(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Elastic
// ============================================================================

/// Period, amplitude, and phase shift shared by the elastic family.
fn elastic_pas(c: f32, d: f32) -> (f32, f32, f32) {
    let p = d * 0.3;
    (p, c, p / 4.0)
}

pub fn in_elastic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let (p, a, s) = elastic_pas(c, d);
    let t = t - 1.0;
    -(a * 2.0_f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

pub fn out_elastic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let (p, a, s) = elastic_pas(c, d);
    a * 2.0_f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

pub fn in_out_elastic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d * 2.0;
    if t == 2.0 {
        return b + c;
    }
    let (p, a, s) = elastic_pas(c, d);
    let t = t - 1.0;
    if t < 0.0 {
        -0.5 * (a * 2.0_f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
    } else {
        a * 2.0_f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() * 0.5 + c + b
    }
}

pub fn out_in_elastic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_elastic(t * 2.0, b, c / 2.0, d)
    } else {
        in_elastic(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Back (overshoot)
// ============================================================================

pub fn in_back(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * ((BACK_S + 1.0) * t - BACK_S) + b
}

pub fn out_back(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * ((BACK_S + 1.0) * t + BACK_S) + 1.0) + b
}

pub fn in_out_back(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_S * 1.525;
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
    }
}

pub fn out_in_back(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_back(t * 2.0, b, c / 2.0, d)
    } else {
        in_back(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// ============================================================================
// Bounce
// ============================================================================

pub fn out_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

pub fn in_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c - out_bounce(d - t, 0.0, c, d) + b
}

pub fn in_out_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        in_bounce(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        out_bounce(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

pub fn out_in_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_bounce(t * 2.0, b, c / 2.0, d)
    } else {
        in_bounce(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}
