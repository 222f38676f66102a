use crate::config::MESSAGING_BASE_URL;

/// Builds a WhatsApp deep link that opens a chat with `phone` and the
/// greeting pre-filled. The messaging service only accepts digits in the
/// path, so spaces, dashes and the leading `+` are dropped.
pub fn whatsapp_link(phone: &str, greeting: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "{}/{}?text={}",
        MESSAGING_BASE_URL,
        digits,
        urlencoding::encode(greeting)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_has_digits_only_phone() {
        let link = whatsapp_link("+34 600-000 000", "Hola");
        assert_eq!(link, "https://wa.me/34600000000?text=Hola");
    }

    #[test]
    fn greeting_is_percent_encoded() {
        let link = whatsapp_link("+34 600 000 000", "Hola Andrea, ¿hablamos?");
        let (_, text) = link.split_once("?text=").unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains(','));
        assert!(!text.contains('?'));
    }

    #[test]
    fn encoded_greeting_decodes_to_original() {
        let greeting = "Hola Andrea, me gustaría recibir información sobre mi hipoteca & plazos 100%.";
        let link = whatsapp_link("+34 600 000 000", greeting);
        let (_, text) = link.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(text).unwrap(), greeting);
    }
}
