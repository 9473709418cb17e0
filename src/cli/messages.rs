//! Localized shell messages
//!
//! One static table per supported locale. Only the shell and the display
//! helpers read these; the core types never produce user-facing text.

use crate::config::Locale;

/// Every user-facing string the shell prints
#[derive(Debug)]
pub struct Messages {
    pub welcome: &'static str,
    pub prompt: &'static str,
    pub goodbye: &'static str,
    pub greeting: &'static str,
    pub unknown_command: &'static str,
    pub help_header: &'static str,

    pub contact_added: &'static str,
    pub contact_updated: &'static str,
    pub contact_deleted: &'static str,
    pub phone_updated: &'static str,
    pub phone_removed: &'static str,
    pub birthday_added: &'static str,
    pub birthday_not_set: &'static str,
    pub no_contacts: &'static str,
    pub no_upcoming_birthdays: &'static str,

    pub contact_not_found: &'static str,
    pub phone_not_found: &'static str,
    pub invalid_phone: &'static str,
    pub invalid_birthday: &'static str,
    pub empty_name: &'static str,
    /// Followed by the command usage
    pub missing_arguments: &'static str,
    /// Followed by the error text
    pub generic_error: &'static str,
    pub save_failed: &'static str,
}

pub static EN: Messages = Messages {
    welcome: "Welcome to the assistant bot!",
    prompt: "Enter a command: ",
    goodbye: "Good bye!",
    greeting: "How can I help you?",
    unknown_command: "Unknown command. Type 'help' to see available commands.",
    help_header: "Available commands:",

    contact_added: "Contact added.",
    contact_updated: "Contact updated.",
    contact_deleted: "Contact deleted.",
    phone_updated: "Phone updated.",
    phone_removed: "Phone removed.",
    birthday_added: "Birthday added.",
    birthday_not_set: "Birthday not set.",
    no_contacts: "No contacts saved.",
    no_upcoming_birthdays: "No upcoming birthdays.",

    contact_not_found: "Contact not found.",
    phone_not_found: "Phone not found.",
    invalid_phone: "Phone number must be exactly 10 digits.",
    invalid_birthday: "Invalid date format. Use DD.MM.YYYY",
    empty_name: "Contact name cannot be empty.",
    missing_arguments: "Not enough arguments. Usage:",
    generic_error: "An error occurred:",
    save_failed: "Could not save contacts:",
};

pub static UK: Messages = Messages {
    welcome: "Вас вітає бот-асистент!",
    prompt: "Введіть команду: ",
    goodbye: "До побачення!",
    greeting: "Чим я можу допомогти?",
    unknown_command: "Невідома команда. Введіть 'help', щоб побачити список команд.",
    help_header: "Доступні команди:",

    contact_added: "Контакт додано.",
    contact_updated: "Контакт оновлено.",
    contact_deleted: "Контакт видалено.",
    phone_updated: "Телефон оновлено.",
    phone_removed: "Телефон видалено.",
    birthday_added: "День народження додано.",
    birthday_not_set: "День народження не вказано.",
    no_contacts: "Немає контактів.",
    no_upcoming_birthdays: "Немає днів народжень найближчим часом.",

    contact_not_found: "Контакт не знайдено.",
    phone_not_found: "Телефон не знайдено.",
    invalid_phone: "Номер телефону має бути 10 цифр.",
    invalid_birthday: "Невірний формат дати. Має бути ДД.ММ.РРРР",
    empty_name: "Ім’я контакту не може бути порожнім.",
    missing_arguments: "Не вистачає аргументів для команди. Використання:",
    generic_error: "Сталася помилка:",
    save_failed: "Не вдалося зберегти контакти:",
};

impl Messages {
    /// The message table for a locale
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Uk => &UK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale() {
        assert_eq!(Messages::for_locale(Locale::En).goodbye, "Good bye!");
        assert_eq!(Messages::for_locale(Locale::Uk).goodbye, "До побачення!");
    }
}
