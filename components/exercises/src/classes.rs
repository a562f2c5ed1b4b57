//! Class syntax: constructors and getter/setter accessors.

/// The bare constructor demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct Vegetable {
    name: String,
}

impl Vegetable {
    /// Create a vegetable with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Vegetable { name: name.into() }
    }

    /// The vegetable's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A thermostat storing Fahrenheit and exposing Celsius.
///
/// The derived accessor converts between the two scales via the fixed
/// affine transform: reading applies `5/9 × (F − 32)`, writing stores
/// `C × 9/5 + 32`.
///
/// # Examples
///
/// ```
/// use exercises::Thermostat;
///
/// let mut thermostat = Thermostat::new(76.0);
/// assert!((thermostat.temperature() - 24.44).abs() < 0.01);
///
/// thermostat.set_temperature(26.0);
/// assert!((thermostat.temperature() - 26.0).abs() < 1e-12);
/// assert!((thermostat.fahrenheit() - 78.8).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermostat {
    fahrenheit: f64,
}

impl Thermostat {
    /// Create a thermostat from a Fahrenheit reading.
    pub fn new(fahrenheit: f64) -> Self {
        Thermostat { fahrenheit }
    }

    /// The temperature in Celsius (the getter).
    pub fn temperature(&self) -> f64 {
        5.0 / 9.0 * (self.fahrenheit - 32.0)
    }

    /// Set the temperature in Celsius (the setter).
    pub fn set_temperature(&mut self, celsius: f64) {
        self.fahrenheit = celsius * 9.0 / 5.0 + 32.0;
    }

    /// The stored Fahrenheit value.
    pub fn fahrenheit(&self) -> f64 {
        self.fahrenheit
    }
}
