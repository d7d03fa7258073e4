use catz_core::model::{EnumDescriptor, EnumMember};
use catz_core::registry::Prompt;
use catz_core::CoreError;
use chrono::NaiveDate;

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

/// Replays canned answers and records what the page showed.
#[derive(Default)]
pub struct ScriptedPrompt {
    pub scales: Vec<i64>,
    pub seen_scales: Vec<i64>,
    pub text: Vec<String>,
    pub select: Option<String>,
    /// Member names or values to toggle, in order.
    pub toggles: Vec<String>,
}

impl Prompt for ScriptedPrompt {
    fn scale(&mut self, _prompt: &str, current: i64) -> Result<i64, CoreError> {
        self.seen_scales.push(current);
        Ok(if self.scales.is_empty() {
            current
        } else {
            self.scales.remove(0)
        })
    }

    fn text_list(&mut self, _prompt: &str, mut current: Vec<String>) -> Result<Vec<String>, CoreError> {
        current.append(&mut self.text);
        Ok(current)
    }

    fn single_select(
        &mut self,
        options: &EnumDescriptor,
        current: &EnumMember,
    ) -> Result<EnumMember, CoreError> {
        Ok(self
            .select
            .take()
            .and_then(|s| options.resolve(&s))
            .unwrap_or_else(|| current.clone()))
    }

    fn multi_select(
        &mut self,
        options: &EnumDescriptor,
        mut current: Vec<EnumMember>,
    ) -> Result<Vec<EnumMember>, CoreError> {
        for toggle in self.toggles.drain(..) {
            let Some(member) = options.resolve(&toggle) else {
                continue;
            };
            match current.iter().position(|m| *m == member) {
                Some(i) => {
                    current.remove(i);
                }
                None => current.push(member),
            }
        }
        Ok(current)
    }
}
