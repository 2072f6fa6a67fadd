use crate::content::Contact;

/// `wa.me` deep link that opens a chat with `message` already typed.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if message.is_empty() {
        format!("https://wa.me/{}", digits)
    } else {
        format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
    }
}

impl Contact {
    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(&self.whatsapp_number, &self.whatsapp_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_percent_encoded() {
        let link = whatsapp_link("5515974018037", "Olá! Quero um orçamento.");
        assert_eq!(
            link,
            "https://wa.me/5515974018037?text=Ol%C3%A1%21%20Quero%20um%20or%C3%A7amento."
        );
    }

    #[test]
    fn number_formatting_is_stripped() {
        assert_eq!(whatsapp_link("+55 (15) 97401-8037", ""), "https://wa.me/5515974018037");
    }
}
