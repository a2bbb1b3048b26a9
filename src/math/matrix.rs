//! Closed-form operations on 3x3 matrices
//!
//! Residual covariances always have one dimension per colour channel, so
//! determinants and inverses are expanded by hand rather than routed
//! through a general linear algebra dependency

/// Row-major 3x3 matrix of `f64` values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    elements: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Create a matrix from row-major elements
    pub const fn new(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// The matrix with every element zero
    pub const fn zero() -> Self {
        Self::new([[0.0; 3]; 3])
    }

    /// Element at `row`, `col`, with both indices taken modulo 3
    pub const fn at(&self, row: usize, col: usize) -> f64 {
        let values = match row % 3 {
            0 => self.elements[0],
            1 => self.elements[1],
            _ => self.elements[2],
        };
        match col % 3 {
            0 => values[0],
            1 => values[1],
            _ => values[2],
        }
    }

    /// Determinant by cofactor expansion along the first row
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;
        let minor_0 = m[1][1].mul_add(m[2][2], -m[1][2] * m[2][1]);
        let minor_1 = m[1][0].mul_add(m[2][2], -m[1][2] * m[2][0]);
        let minor_2 = m[1][0].mul_add(m[2][1], -m[1][1] * m[2][0]);
        m[0][2].mul_add(minor_2, m[0][0].mul_add(minor_0, -m[0][1] * minor_1))
    }

    /// Inverse via the adjugate, or `None` when the determinant magnitude
    /// is below `epsilon`
    pub fn inverse(&self, epsilon: f64) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < epsilon {
            return None;
        }

        let m = &self.elements;
        let inv_det = det.recip();

        // Adjugate: transposed cofactors, signs baked into the operand order
        let adjugate = [
            [
                m[1][1].mul_add(m[2][2], -m[1][2] * m[2][1]),
                m[0][2].mul_add(m[2][1], -m[0][1] * m[2][2]),
                m[0][1].mul_add(m[1][2], -m[0][2] * m[1][1]),
            ],
            [
                m[1][2].mul_add(m[2][0], -m[1][0] * m[2][2]),
                m[0][0].mul_add(m[2][2], -m[0][2] * m[2][0]),
                m[0][2].mul_add(m[1][0], -m[0][0] * m[1][2]),
            ],
            [
                m[1][0].mul_add(m[2][1], -m[1][1] * m[2][0]),
                m[0][1].mul_add(m[2][0], -m[0][0] * m[2][1]),
                m[0][0].mul_add(m[1][1], -m[0][1] * m[1][0]),
            ],
        ];

        let mut elements = adjugate;
        for row in &mut elements {
            for entry in row {
                *entry *= inv_det;
            }
        }

        Some(Self::new(elements))
    }

    /// Matrix-vector product
    pub fn mul_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.elements;
        [
            m[0][2].mul_add(v[2], m[0][0].mul_add(v[0], m[0][1] * v[1])),
            m[1][2].mul_add(v[2], m[1][0].mul_add(v[0], m[1][1] * v[1])),
            m[2][2].mul_add(v[2], m[2][0].mul_add(v[0], m[2][1] * v[1])),
        ]
    }

    /// Quadratic form `v' M v`
    pub fn quadratic_form(&self, v: [f64; 3]) -> f64 {
        let mv = self.mul_vector(v);
        v[2].mul_add(mv[2], v[0].mul_add(mv[0], v[1] * mv[1]))
    }
}
