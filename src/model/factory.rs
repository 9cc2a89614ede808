use super::{Domain, Field, GrayScott};
use crate::config::Config;
use crate::error::Result;

pub struct GrayScottFactory;

impl GrayScottFactory {
    pub fn create(config: &Config) -> Result<GrayScott> {
        let params = config.params;
        params.validate()?;
        params.warn();

        let domain = config.domain()?;
        let (u, v) = Self::create_fields(domain, config);
        Ok(GrayScott::new(domain, params, u, v))
    }

    fn create_fields(domain: Domain, config: &Config) -> (Field, Field) {
        let mut u = Field::new(domain, 1.0);
        let mut v = Field::new(domain, 0.0);
        config.init.apply(&mut u, &mut v);
        (u, v)
    }
}
