use log::info;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    bounds::Bounds,
    error::Error,
    params::Params,
    polygon::Polygon,
    sector::{build_original_sector, build_rearranged_sector, limits, Arrangement, Limits},
    view::{original_view, rearranged_view},
};

/// Everything needed to draw both panels for one set of parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Decomposition {
    pub params: Params,
    pub samples: usize,
    pub original: Vec<Polygon<f64>>,
    pub rearranged: Arrangement,
    pub original_view: Bounds,
    pub rearranged_view: Bounds,
    pub limits: Limits,
}

impl Decomposition {
    /// Validate `params` and compute both panels.
    pub fn new(params: Params, samples: usize) -> Result<Self, Error> {
        params.validate()?;
        if samples < 2 {
            return Err(Error::Samples(samples));
        }
        let original = build_original_sector(&params, samples);
        let rearranged = build_rearranged_sector(&params, samples);
        let original_view = original_view(params.radius);
        let rearranged_view = rearranged_view(rearranged.final_width, params.radius);
        let limits = limits(&params);
        info!(
            "decomposed {}: width {:.4} (→ {:.4}), height {:.4} (→ {:.4})",
            params,
            rearranged.final_width,
            limits.width,
            rearranged.vertical_extent(),
            limits.height,
        );
        Ok(Decomposition {
            params,
            samples,
            original,
            rearranged,
            original_view,
            rearranged_view,
            limits,
        })
    }

    pub fn segments(&self) -> usize {
        self.params.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ParamsError, sector::DEFAULT_SAMPLES};

    #[test_log::test]
    fn test_default() {
        let d = Decomposition::new(Params::default(), DEFAULT_SAMPLES).unwrap();
        assert_eq!(d.segments(), 12);
        assert_eq!(d.original.len(), 12);
        assert_eq!(d.rearranged.len(), 12);
        assert_eq!(d.original_view.max.x, 5.5);
        assert_eq!(d.rearranged_view.max.x, d.rearranged.final_width + 0.5);
        assert_relative_eq!(d.limits.area, 12.5 * std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(
            Decomposition::new(Params::new(180., 1, 5.), DEFAULT_SAMPLES),
            Err(Error::Params(ParamsError::Segments(1)))
        );
        assert_eq!(
            Decomposition::new(Params::new(400., 12, 5.), DEFAULT_SAMPLES),
            Err(Error::Params(ParamsError::Angle(400.)))
        );
        assert_eq!(Decomposition::new(Params::default(), 1), Err(Error::Samples(1)));
    }

    #[test]
    fn test_json_shape() {
        let d = Decomposition::new(Params::new(90., 2, 1.), 2).unwrap();
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["params"]["segments"], 2);
        assert_eq!(v["original"].as_array().unwrap().len(), 2);
        assert_eq!(v["original"][0]["vertices"].as_array().unwrap().len(), 3);
        assert!(v["rearranged"]["finalWidth"].as_f64().unwrap() > 0.);
        assert!(v["rearrangedView"]["max"]["y"].is_number());
        let back: Decomposition = serde_json::from_value(v).unwrap();
        assert_eq!(back.params, d.params);
        assert_eq!(back.rearranged.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let p = Params::new(137., 33, 6.5);
        assert_eq!(Decomposition::new(p, 17), Decomposition::new(p, 17));
    }
}
