/// Quadratic drag with a fixed lumped coefficient. No density or Mach terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64) -> Self {
        Aerodynamics { drag_coefficient }
    }

    pub fn drag_force(&self, velocity: f64) -> f64 {
        self.drag_coefficient * velocity.powi(2)
    }
}
