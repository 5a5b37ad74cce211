use super::contact::Contact;

/// What the list area should say besides the rows themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSignal {
    None,
    /// The collection itself is empty.
    NoContacts,
    /// A non-empty query matched nothing in a non-empty collection.
    NotFound,
}

impl ListSignal {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ListSignal::None => None,
            ListSignal::NoContacts => Some("No contacts yet"),
            ListSignal::NotFound => Some("Contact not found."),
        }
    }
}

/// True when the contact's name contains `query` ignoring case, or its
/// phone contains `query` exactly.
pub fn contact_matches(contact: &Contact, query: &str) -> bool {
    contact.name.to_lowercase().contains(&query.to_lowercase()) || contact.phone.contains(query)
}

/// Subsequence of `contacts` matching `query`, in insertion order. An empty
/// query keeps everything.
pub fn filter<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }

    contacts
        .iter()
        .filter(|c| contact_matches(c, query))
        .collect()
}

pub fn list_signal(total: usize, matched: usize, query: &str) -> ListSignal {
    if total == 0 {
        ListSignal::NoContacts
    } else if matched == 0 && !query.is_empty() {
        ListSignal::NotFound
    } else {
        ListSignal::None
    }
}
