//! Gesture scripts: `<row>:<percentage>[:<velocity>]`, one per argument.

use anyhow::{bail, Context, Result};

/// One scripted swipe: drag row `row` to `percentage`, release with
/// horizontal `velocity` (points per second).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub row: usize,
    pub percentage: f32,
    pub velocity: f32,
}

impl Gesture {
    pub fn new(row: usize, percentage: f32) -> Self {
        Self {
            row,
            percentage,
            velocity: 0.0,
        }
    }

    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn parse(arg: &str) -> Result<Self> {
        let mut parts = arg.split(':');
        let row = parts
            .next()
            .filter(|part| !part.is_empty())
            .with_context(|| format!("missing row index in `{arg}`"))?;
        let row: usize = row
            .parse()
            .with_context(|| format!("invalid row index `{row}` in `{arg}`"))?;

        let Some(percentage) = parts.next() else {
            bail!("missing percentage in `{arg}`, expected <row>:<percentage>[:<velocity>]");
        };
        let percentage: f32 = percentage
            .parse()
            .with_context(|| format!("invalid percentage `{percentage}` in `{arg}`"))?;
        if !(-1.0..=1.0).contains(&percentage) {
            bail!("percentage {percentage} in `{arg}` is outside [-1, 1]");
        }

        let velocity = match parts.next() {
            Some(velocity) => velocity
                .parse()
                .with_context(|| format!("invalid velocity `{velocity}` in `{arg}`"))?,
            None => 0.0,
        };
        if parts.next().is_some() {
            bail!("too many fields in `{arg}`");
        }

        Ok(Self::new(row, percentage).with_velocity(velocity))
    }
}

/// Parse every argument, or fall back to the built-in script when empty.
pub fn parse_script<I, S>(args: I) -> Result<Vec<Gesture>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let gestures = args
        .into_iter()
        .map(|arg| Gesture::parse(arg.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    if gestures.is_empty() {
        return Ok(default_script());
    }
    Ok(gestures)
}

/// Insert below the first row, delete the second, then a short drag that
/// bounces back.
pub fn default_script() -> Vec<Gesture> {
    vec![
        Gesture::new(0, 0.3),
        Gesture::new(2, -0.5).with_velocity(-400.0),
        Gesture::new(1, 0.05),
        Gesture::new(3, 0.5),
    ]
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
