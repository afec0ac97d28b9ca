//! Ordered step sequences and their flattened application form.

use super::step::Step;

/// Application order of a chain's steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOrder {
    /// Step 0 applies first.
    TopToBottom,
}

impl ChainOrder {
    /// Wire name of this order.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopToBottom => "top_to_bottom",
        }
    }
}

/// An ordered sequence of transform steps, applied top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    order: ChainOrder,
    steps: Vec<Step>,
}

impl Chain {
    /// Create a chain from steps in application order.
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            order: ChainOrder::TopToBottom,
            steps,
        }
    }

    /// The application order tag.
    pub fn order(&self) -> ChainOrder {
        self.order
    }

    /// Steps in application order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Flatten into the positional form ANTs' apply-transforms routine
    /// expects: index-aligned file paths and invert flags, list order equal
    /// to application order.
    pub fn to_apply_transforms_args(&self) -> (Vec<String>, Vec<bool>) {
        let mut transforms = Vec::with_capacity(self.steps.len());
        let mut whichtoinvert = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            transforms.push(step.file().to_owned());
            whichtoinvert.push(step.invert_flag());
        }
        (transforms, whichtoinvert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::step::FieldRole;

    #[test]
    fn test_chain_order_fixed() {
        let chain = Chain::new(vec![]);
        assert_eq!(chain.order(), ChainOrder::TopToBottom);
        assert_eq!(chain.order().as_str(), "top_to_bottom");
        assert!(chain.is_empty());
    }

    #[test]
    fn test_flatten_alignment() {
        let chain = Chain::new(vec![
            Step::field("W.nii.gz", FieldRole::Forward),
            Step::affine("A.mat", true),
        ]);
        let (transforms, whichtoinvert) = chain.to_apply_transforms_args();
        assert_eq!(transforms.len(), chain.len());
        assert_eq!(whichtoinvert.len(), chain.len());
        assert_eq!(transforms, ["W.nii.gz", "A.mat"]);
        assert_eq!(whichtoinvert, [false, true]);
    }
}
