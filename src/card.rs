use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    pub title: String,
    pub set_no: String,
    pub card_no: String,
    pub image_url: String,
    pub image_path: String,
    pub image_name: String,
    pub props: HashMap<String, String>,
}

impl CardData {
    /// Five-digit identifier, `<set_no><card_no>`.
    pub fn card_id(&self) -> String {
        format!("{}{}", self.set_no, self.card_no)
    }

    /// Replaces the heading-derived numbers with the ones the caller knows.
    pub fn renumber(&mut self, set: u32, index: u32) {
        self.set_no = format!("{:02}", set);
        self.card_no = format!("{:03}", index);
    }
}
