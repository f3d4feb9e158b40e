#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeNumberValidator;

impl NegativeNumberValidator {
    pub fn is_negative(&self, number: i32) -> bool {
        number < 0
    }
}
