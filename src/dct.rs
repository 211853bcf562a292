use crate::basis::BASIS;
use crate::block::{Block, BLOCK_SIZE};

/// Forward 8-point DCT-II butterfly along one axis.
///
/// Reads and overwrites `data[offset + i * stride]` for `i` in `0..8`. The
/// outputs are ordered low-to-high frequency, index 0 being the DC term,
/// and carry the full normalization `k`. The butterfly computes exactly the
/// matrix product `k * M * v` with:
///
/// ```text
///      1.00,  1.00,  1.00,  1.00,  1.00,  1.00,  1.00,  1.00
///        a1,    b1,    c1,    d1,   -d1,   -c1,   -b1,   -a1
///        a2,    b2,   -b2,   -a2,   -a2,   -b2,    b2,    a2
///        b1,   -d1,   -a1,   -c1,    c1,    a1,    d1,   -b1
///      1.00, -1.00, -1.00,  1.00,  1.00, -1.00, -1.00,  1.00
///        c1,   -a1,    d1,    b1,   -b1,   -d1,    a1,   -c1
///        b2,   -a2,    a2,   -b2,   -b2,    a2,   -a2,    b2
///        d1,   -c1,    b1,   -a1,    a1,   -b1,    c1,   -d1
/// ```
///
/// Every output row uses the `k`-pre-scaled constants, index 2 included,
/// so the row and column passes of the 2D transform are the same function.
fn forward_1d(data: &mut [f32], offset: usize, stride: usize) {
    let b = BASIS;

    let v0 = data[offset];
    let v1 = data[offset + stride];
    let v2 = data[offset + 2 * stride];
    let v3 = data[offset + 3 * stride];
    let v4 = data[offset + 4 * stride];
    let v5 = data[offset + 5 * stride];
    let v6 = data[offset + 6 * stride];
    let v7 = data[offset + 7 * stride];

    let s0 = v0 + v7;
    let s1 = v1 + v6;
    let s2 = v2 + v5;
    let s3 = v3 + v4;
    let m0 = v0 - v7;
    let m1 = v1 - v6;
    let m2 = v2 - v5;
    let m3 = v3 - v4;

    let ss1 = s1 + s2;
    let mm1 = s1 - s2;
    let ss2 = s0 + s3;
    let mm2 = s0 - s3;

    data[offset] = (ss2 + ss1) * b.k;
    data[offset + stride] = b.ka1 * m0 + b.kb1 * m1 + b.kc1 * m2 + b.kd1 * m3;
    data[offset + 2 * stride] = b.ka2 * mm2 + b.kb2 * mm1;
    data[offset + 3 * stride] = b.kb1 * m0 - b.kd1 * m1 - b.ka1 * m2 - b.kc1 * m3;
    data[offset + 4 * stride] = (ss2 - ss1) * b.k;
    data[offset + 5 * stride] = b.kc1 * m0 - b.ka1 * m1 + b.kd1 * m2 + b.kb1 * m3;
    data[offset + 6 * stride] = b.kb2 * mm2 - b.ka2 * mm1;
    data[offset + 7 * stride] = b.kd1 * m0 - b.kc1 * m1 + b.kb1 * m2 - b.ka1 * m3;
}

/// Inverse 8-point DCT-III butterfly along one axis.
///
/// Reads and overwrites `data[offset + i * stride]` for `i` in `0..8`.
/// Reconstruction is the transpose of the forward basis matrix:
///
/// ```text
///      1.00,    a1,    a2,    b1,  1.00,    c1,    b2,    d1
///      1.00,    b1,    b2,   -d1, -1.00,   -a1,   -a2,   -c1
///      1.00,    c1,   -b2,   -a1, -1.00,    d1,    a2,    b1
///      1.00,    d1,   -a2,   -c1,  1.00,    b1,   -b2,   -a1
///      1.00,   -d1,   -a2,    c1,  1.00,   -b1,   -b2,    a1
///      1.00,   -c1,   -b2,    a1, -1.00,   -d1,    a2,   -b1
///      1.00,   -b1,    b2,    d1, -1.00,    a1,   -a2,    c1
///      1.00,   -a1,    a2,   -b1,  1.00,   -c1,    b2,   -d1
/// ```
///
/// No multiplication by `k` happens here: the normalization is folded
/// entirely into the forward pass.
fn inverse_1d(data: &mut [f32], offset: usize, stride: usize) {
    let b = BASIS;

    let x0 = data[offset];
    let x1 = data[offset + stride];
    let x2 = data[offset + 2 * stride];
    let x3 = data[offset + 3 * stride];
    let x4 = data[offset + 4 * stride];
    let x5 = data[offset + 5 * stride];
    let x6 = data[offset + 6 * stride];
    let x7 = data[offset + 7 * stride];

    // Even half: the four even-frequency coefficients contribute one of four
    // values, each shared by a mirrored pair of outputs.
    let e0 = x0 + x4;
    let e1 = x0 - x4;
    let o0 = b.a2 * x2 + b.b2 * x6;
    let o1 = b.b2 * x2 - b.a2 * x6;

    let ss1 = e0 + o0;
    let mm1 = e0 - o0;
    let mm2 = e1 + o1;
    let ss2 = e1 - o1;

    // Odd half: four dot products over the odd-frequency coefficients, added
    // to the top half of the outputs and subtracted from the bottom half.
    let k1 = b.a1 * x1 + b.b1 * x3 + b.c1 * x5 + b.d1 * x7;
    let k2 = b.b1 * x1 - b.d1 * x3 - b.a1 * x5 - b.c1 * x7;
    let k3 = b.c1 * x1 - b.a1 * x3 + b.d1 * x5 + b.b1 * x7;
    let k4 = b.d1 * x1 - b.c1 * x3 + b.b1 * x5 - b.a1 * x7;

    data[offset] = ss1 + k1;
    data[offset + stride] = mm2 + k2;
    data[offset + 2 * stride] = ss2 + k3;
    data[offset + 3 * stride] = mm1 + k4;
    data[offset + 4 * stride] = mm1 - k4;
    data[offset + 5 * stride] = ss2 - k3;
    data[offset + 6 * stride] = mm2 - k2;
    data[offset + 7 * stride] = ss1 - k1;
}

/// Transforms a block of samples into its frequency-domain representation,
/// in place.
///
/// The 2D transform is separable: every row goes through the forward 1D
/// butterfly, then every column. The order is fixed; it determines how
/// rounding error accumulates, and the round-trip tolerance accounts for
/// exactly this path.
pub fn forward(block: &mut Block) {
    let data = block.samples_mut();
    for row in 0..BLOCK_SIZE {
        forward_1d(data, row * BLOCK_SIZE, 1);
    }
    for col in 0..BLOCK_SIZE {
        forward_1d(data, col, BLOCK_SIZE);
    }
}

/// Transforms a block of frequency coefficients back into samples, in place.
///
/// Columns first, then rows: the structural mirror of [`forward`].
pub fn inverse(block: &mut Block) {
    let data = block.samples_mut();
    for col in 0..BLOCK_SIZE {
        inverse_1d(data, col, BLOCK_SIZE);
    }
    for row in 0..BLOCK_SIZE {
        inverse_1d(data, row * BLOCK_SIZE, 1);
    }
}
