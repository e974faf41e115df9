//! Embedded wordlists for person data.

pub const FIRST_NAMES: &[&str] = &[
    "Aisha", "Alejandro", "Amara", "Andrei", "Anita", "Arjun", "Astrid", "Carlos", "Chen",
    "Daniela", "David", "Elena", "Emeka", "Fatima", "Felix", "Grace", "Hana", "Ibrahim", "Ines",
    "Ivan", "James", "Jasmine", "Kavya", "Kenji", "Laila", "Liam", "Lucia", "Mateo", "Maya",
    "Mohammed", "Nadia", "Noah", "Olga", "Omar", "Priya", "Rahul", "Sofia", "Tariq", "Wei",
    "Yuki", "Zara",
];

pub const LAST_NAMES: &[&str] = &[
    "Abebe", "Ahmed", "Andersson", "Bauer", "Chen", "Costa", "Diallo", "Fernandez", "Fischer",
    "Garcia", "Haddad", "Hansen", "Ivanov", "Johnson", "Kim", "Kowalski", "Kumar", "Lee", "Li",
    "Martinez", "Mbeki", "Murphy", "Nakamura", "Nguyen", "Novak", "Okafor", "Patel", "Popescu",
    "Rahman", "Rossi", "Santos", "Schmidt", "Sharma", "Silva", "Singh", "Suzuki", "Tanaka",
    "Torres", "Wang", "Yilmaz",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.example.com",
    "corp.example.org",
];
