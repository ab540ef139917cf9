//! Interactive prompts for collecting form input.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use students::{Field, Gender, StudentForm, ValidationErrors};

use super::{render, terminal::Colorize};

/// Placeholder entry at the top of the gender list. Choosing it leaves the
/// field empty.
const NO_GENDER: &str = "Select your gender";

#[derive(Default)]
pub struct Prompter {
    theme: ColorfulTheme,
}

impl Prompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a list of items, returning the chosen index, or `None` if the
    /// user backs out with Esc or q.
    pub fn choose(&self, prompt: &str, items: &[String]) -> anyhow::Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> anyhow::Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    /// Prompts for every field of the form in turn, starting from its current
    /// values.
    ///
    /// Errors from a previous attempt are shown above their field. A field's
    /// error is cleared as soon as its value changes.
    pub fn form(
        &self,
        mut form: StudentForm,
        errors: &mut ValidationErrors,
    ) -> anyhow::Result<StudentForm> {
        for field in Field::ALL {
            if let Some(error) = errors.get(field) {
                eprintln!("{}", render::field_error(field, error).error());
            }

            let current = form.get(field).to_string();
            let value = if field == Field::Gender {
                self.gender(&current)?
            } else {
                self.text(field, &current)?
            };

            if value != current {
                errors.clear(field);
            }
            form.set(field, value);
        }
        Ok(form)
    }

    fn text(&self, field: Field, current: &str) -> anyhow::Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt_label(field))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn gender(&self, current: &str) -> anyhow::Result<String> {
        let mut items = vec![NO_GENDER.to_string()];
        items.extend(Gender::ALL.map(|g| g.label().to_string()));

        let selected = current
            .parse::<Gender>()
            .ok()
            .and_then(|gender| Gender::ALL.iter().position(|g| *g == gender))
            .map_or(0, |i| i + 1);

        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt_label(Field::Gender))
            .items(&items[..])
            .default(selected)
            .interact()?;

        Ok(index
            .checked_sub(1)
            .map(|i| Gender::ALL[i].to_string())
            .unwrap_or_default())
    }
}

fn prompt_label(field: Field) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}
