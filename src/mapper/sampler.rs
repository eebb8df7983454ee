//! Sampler codec: distribution snapshots to and from tagged sampler options

use crate::document::SamplerOption;
use crate::error::TemplateError;
use crate::graph::{Distribution, Range, Sampler};

/// Encode a sampler's distribution as a tagged option, widened to document
/// precision
///
/// A sampler whose distribution family the template format cannot express
/// reports no snapshot; that is a fatal error, not a skip, because it means
/// an unhandled distribution kind was introduced into the graph.
pub fn encode_sampler(
    field: &str,
    sampler: &dyn Sampler,
) -> Result<SamplerOption, TemplateError> {
    let distribution = sampler
        .distribution()
        .ok_or_else(|| TemplateError::unsupported_sampler(field))?;

    Ok(match distribution {
        Distribution::Constant { value } => SamplerOption::Constant {
            value: f64::from(value),
        },
        Distribution::Uniform { range } => SamplerOption::Uniform {
            min: f64::from(range.minimum),
            max: f64::from(range.maximum),
        },
        Distribution::Normal {
            range,
            mean,
            standard_deviation,
        } => SamplerOption::Normal {
            min: f64::from(range.minimum),
            max: f64::from(range.maximum),
            mean: f64::from(mean),
            standard_deviation: f64::from(standard_deviation),
        },
    })
}

/// Decode a tagged option back to a distribution, narrowed to the graph's
/// working precision
pub fn decode_sampler(
    field: &str,
    option: &SamplerOption,
) -> Result<Distribution, TemplateError> {
    match option {
        SamplerOption::Constant { value } => Ok(Distribution::Constant {
            value: *value as f32,
        }),
        SamplerOption::Uniform { min, max } => Ok(Distribution::Uniform {
            range: Range::new(*min as f32, *max as f32),
        }),
        SamplerOption::Normal {
            min,
            max,
            mean,
            standard_deviation,
        } => Ok(Distribution::Normal {
            range: Range::new(*min as f32, *max as f32),
            mean: *mean as f32,
            standard_deviation: *standard_deviation as f32,
        }),
        SamplerOption::Unknown => Err(TemplateError::unsupported_sampler(field)),
    }
}
