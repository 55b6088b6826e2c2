//! 整数版の数学ヘルパー。
//!
//! 除算・剰余は負の被除数に対しても床関数ベースで振る舞う
//! (組み込みの `/`, `%` は 0 方向への切り捨て)。

pub fn max(a: i32, b: i32) -> i32 {
    std::cmp::max(a, b)
}

pub fn min(a: i32, b: i32) -> i32 {
    std::cmp::min(a, b)
}

pub fn abs(i: i32) -> i32 {
    i.abs()
}

pub fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    min(max(v, lo), hi)
}

// hi は含まない
pub fn clamp_exclusive(v: i32, lo: i32, hi: i32) -> i32 {
    clamp(v, lo, hi - 1)
}

pub fn signum(i: i32) -> i32 {
    i.signum()
}

pub fn floor_to_int(f: f32) -> i32 {
    f.floor() as i32
}

/// 床除算 (負の無限大方向へ丸める)。`n == 0` なら panic。
pub fn floor_div(m: i32, n: i32) -> i32 {
    let q = m / n;
    if m % n != 0 && ((m < 0) != (n < 0)) {
        q - 1
    } else {
        q
    }
}

/// `floor_div` と対になる剰余。結果の符号は `n` に揃う。
pub fn floor_mod(m: i32, n: i32) -> i32 {
    let r = m % n;
    if r != 0 && ((r < 0) != (n < 0)) {
        r + n
    } else {
        r
    }
}

pub fn frac(x: f32) -> f32 {
    x - floor_to_int(x) as f32
}
