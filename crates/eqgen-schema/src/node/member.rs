use crate::prelude::*;

///
/// MemberDescriptor
///
/// One identity-determining member. For `AccessorMethod` members `name` is
/// the accessor's own method name.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MemberDescriptor {
    pub name: String,

    #[serde(default)]
    pub access: AccessKind,

    pub category: TypeCategory,
}

impl MemberDescriptor {
    #[must_use]
    pub fn field(name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            access: AccessKind::DirectField,
            category,
        }
    }

    #[must_use]
    pub fn accessor(name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            access: AccessKind::AccessorMethod,
            category,
        }
    }

    /// The auto-assigned numeric identifier used when nothing else is marked.
    #[must_use]
    pub fn surrogate_id() -> Self {
        Self::field(crate::SURROGATE_ID_NAME, TypeCategory::IntegerLike)
    }

    #[must_use]
    pub const fn is_accessor(&self) -> bool {
        matches!(self.access, AccessKind::AccessorMethod)
    }

    /// Name of the public getter a caller uses to read this member.
    ///
    /// Primitive `boolean` fields read through `is`; a boolean field already
    /// named `isX` is its own getter name.
    #[must_use]
    pub fn getter_name(&self) -> String {
        if self.is_accessor() {
            return self.name.clone();
        }

        let prefix = if self.category == TypeCategory::Boolean {
            if has_is_prefix(&self.name) {
                return self.name.clone();
            }
            "is"
        } else {
            "get"
        };

        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => format!("{prefix}{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => prefix.to_string(),
        }
    }
}

// `isActive` but not `island`
fn has_is_prefix(name: &str) -> bool {
    name.strip_prefix("is")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

///
/// MemberList
///
/// Identity members in declaration order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MemberList {
    pub members: Vec<MemberDescriptor>,
}

impl MemberList {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberDescriptor> {
        self.members.iter()
    }

    pub fn push(&mut self, member: MemberDescriptor) {
        self.members.push(member);
    }
}

impl From<Vec<MemberDescriptor>> for MemberList {
    fn from(members: Vec<MemberDescriptor>) -> Self {
        Self { members }
    }
}

impl<'a> IntoIterator for &'a MemberList {
    type Item = &'a MemberDescriptor;
    type IntoIter = std::slice::Iter<'a, MemberDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
