/// Cosine-derived constants parameterizing the 8-point transform.
///
/// The six scalars are the distinct values of `sqrt(2) * cos(n * PI / 16)`
/// appearing in the 8x8 DCT-II basis matrix:
///
/// ```text
/// a1 = sqrt(2) * cos(1 * PI / 16)
/// a2 = sqrt(2) * cos(2 * PI / 16)
/// b1 = sqrt(2) * cos(3 * PI / 16)
/// c1 = sqrt(2) * cos(5 * PI / 16)
/// b2 = sqrt(2) * cos(6 * PI / 16)
/// d1 = sqrt(2) * cos(7 * PI / 16)
/// ```
///
/// `k` is the per-pass normalization. It is 1/8 rather than 1/sqrt(8) so the
/// whole normalization lives in the forward pass and the inverse pass needs
/// no multiply at all.
///
/// The `k*`-prefixed fields are the same six scalars pre-multiplied by `k`.
/// They are derived from the unscaled fields inside [`Basis::new`], so the
/// two forms cannot drift apart.
#[derive(Debug, Clone, Copy)]
pub struct Basis {
    pub a1: f32,
    pub a2: f32,
    pub b1: f32,
    pub b2: f32,
    pub c1: f32,
    pub d1: f32,
    pub k: f32,
    pub ka1: f32,
    pub ka2: f32,
    pub kb1: f32,
    pub kb2: f32,
    pub kc1: f32,
    pub kd1: f32,
}

impl Basis {
    const fn new() -> Self {
        const K: f32 = 0.125;
        const A1: f32 = 1.3870398453221475;
        const A2: f32 = 1.3065629648763766;
        const B1: f32 = 1.1758756024193588;
        const B2: f32 = 0.54119610014619712;
        const C1: f32 = 0.78569495838710224;
        const D1: f32 = 0.27589937928294311;

        Self {
            a1: A1,
            a2: A2,
            b1: B1,
            b2: B2,
            c1: C1,
            d1: D1,
            k: K,
            ka1: A1 * K,
            ka2: A2 * K,
            kb1: B1 * K,
            kb2: B2 * K,
            kc1: C1 * K,
            kd1: D1 * K,
        }
    }
}

/// The one shared table. Immutable after initialization; safe for
/// unsynchronized concurrent reads from any number of threads.
pub const BASIS: Basis = Basis::new();
