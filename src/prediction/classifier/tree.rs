use super::{Classifier, check_width};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One node of a fitted CART tree. Node `0` is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Samples with `x[feature] <= threshold` go left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Weighted sample counts for the negative and positive class.
    Leaf { value: [f64; 2] },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub n_features: usize,
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl DecisionTree {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::model_load("decision tree has no nodes"));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= self.n_features {
                        return Err(Error::model_load(format!(
                            "node {} splits on feature {} of {}",
                            index, feature, self.n_features
                        )));
                    }
                    // Children always follow their parent, so a valid tree has no cycles.
                    let in_order = |child: usize| child > index && child < self.nodes.len();
                    if !in_order(left) || !in_order(right) {
                        return Err(Error::model_load(format!(
                            "node {} has invalid children {} / {}",
                            index, left, right
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(Error::model_load(format!(
                            "node {} has NaN threshold",
                            index
                        )));
                    }
                }
                TreeNode::Leaf { value } => {
                    let bad_weight = value.iter().any(|v| !v.is_finite() || *v < 0.0);
                    if bad_weight || value[0] + value[1] <= 0.0 {
                        return Err(Error::model_load(format!(
                            "leaf {} has invalid class weights {:?}",
                            index, value
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf(&self, features: &[f64]) -> Result<[f64; 2]> {
        check_width(self.n_features, features)?;
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    // Trees built in code skip `validate`, so the split index is checked here.
                    let value = features.get(*feature).ok_or_else(|| {
                        Error::inference(format!(
                            "node {} splits on feature {} of {}",
                            index,
                            feature,
                            features.len()
                        ))
                    })?;
                    index = if *value <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                None => {
                    return Err(Error::inference(format!(
                        "tree node {} does not exist",
                        index
                    )));
                }
            }
        }
        Err(Error::inference("tree traversal did not reach a leaf"))
    }

    fn probability(&self, features: &[f64]) -> Result<f64> {
        let [negative, positive] = self.leaf(features)?;
        Ok(positive / (negative + positive))
    }
}

impl Classifier for DecisionTree {
    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }

    fn predict(&self, features: &[f64]) -> Result<u8> {
        let [negative, positive] = self.leaf(features)?;
        Ok(u8::from(positive > negative))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>> {
        self.probability(features).map(Some)
    }
}

impl RandomForest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(Error::model_load("random forest has no trees"));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            if tree.n_features != self.n_features {
                return Err(Error::model_load(format!(
                    "tree {} expects {} features, forest expects {}",
                    index, tree.n_features, self.n_features
                )));
            }
            tree.validate()?;
        }
        Ok(())
    }

    fn probability(&self, features: &[f64]) -> Result<f64> {
        check_width(self.n_features, features)?;
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.probability(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }

    fn predict(&self, features: &[f64]) -> Result<u8> {
        Ok(u8::from(self.probability(features)? > 0.5))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>> {
        self.probability(features).map(Some)
    }
}
