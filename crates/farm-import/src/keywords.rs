//! Semantic fields and the synonym table used to recognize them.

/// The five record attributes the importer locates among spreadsheet columns.
///
/// The declaration order doubles as the matching priority: when a header cell
/// could satisfy several fields, the earliest field in [`Field::PRIORITY`]
/// claims it first. Keep this order stable; header detection depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Address,
    Qty,
    Memo,
}

impl Field {
    /// Fixed matching priority: name, phone, address, qty, memo.
    pub const PRIORITY: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Address,
        Field::Qty,
        Field::Memo,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::Qty => "qty",
            Field::Memo => "memo",
        }
    }
}

/// Fixed mapping from semantic field to the synonym substrings that
/// recognize it in a header cell.
///
/// Synonyms are matched against normalized cells (whitespace stripped,
/// lowercased), so entries here must already be lowercase. Invariant: the
/// `Name` and `Phone` lists are non-empty — header detection refuses any
/// candidate row that maps neither of those two fields.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: [(Field, &'static [&'static str]); 5],
}

impl KeywordTable {
    /// Returns the synonyms for one field, in match order.
    #[must_use]
    pub fn synonyms(&self, field: Field) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, s)| *s)
            .unwrap_or(&[])
    }

    /// Iterates fields with their synonyms in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static [&'static str])> + '_ {
        self.entries.iter().map(|(f, s)| (*f, *s))
    }
}

impl Default for KeywordTable {
    /// Header wordings seen in real order sheets from non-technical senders.
    fn default() -> Self {
        Self {
            entries: [
                (Field::Name, &["이름", "성함", "고객명", "받는분", "수령인"]),
                (Field::Phone, &["전화", "연락처", "h.p", "mobile"]),
                (Field::Address, &["주소", "배송지", "수령지"]),
                (Field::Qty, &["수량", "박스", "개수"]),
                (Field::Memo, &["비고", "메모"]),
            ],
        }
    }
}
