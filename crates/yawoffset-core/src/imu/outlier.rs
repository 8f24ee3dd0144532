/// Accepts samples that stay within a fixed distance of a reference value.
#[derive(Debug, Clone, Copy)]
pub struct OutlierGate {
    threshold: f64,
}

impl OutlierGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// `|sample - reference| <= threshold`. Non-finite samples never pass.
    pub fn accepts(&self, sample: f64, reference: f64) -> bool {
        (sample - reference).abs() <= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        let gate = OutlierGate::new(0.5);
        assert!(gate.accepts(0.5, 0.0));
        assert!(gate.accepts(-0.5, 0.0));
        assert!(!gate.accepts(0.51, 0.0));
    }

    #[test]
    fn measured_against_reference() {
        let gate = OutlierGate::new(0.05);
        assert!(!gate.accepts(0.0, 0.1));
        assert!(gate.accepts(0.12, 0.1));
    }

    #[test]
    fn rejects_non_finite() {
        let gate = OutlierGate::new(0.05);
        assert!(!gate.accepts(f64::NAN, 0.0));
        assert!(!gate.accepts(f64::INFINITY, 0.0));
        assert!(!gate.accepts(f64::NEG_INFINITY, 0.0));
    }
}
