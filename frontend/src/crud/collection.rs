use super::entity::{Entity, Identity};

/// Ordered, in-memory list of records of one kind. Insertion order is kept;
/// edits replace in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<E> {
    items: Vec<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> Collection<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends `draft` under an identity from `issue`, drawing again while the
    /// issued id is already taken.
    pub fn create(&mut self, mut draft: E, mut issue: impl FnMut() -> Identity) -> Identity {
        let mut identity = issue();
        while self.contains(&identity.id) {
            identity = issue();
        }
        draft.stamp(&identity);
        self.items.push(draft);
        identity
    }

    /// Replaces the record with `id`, keeping its identity. Returns `false`
    /// when no such record exists.
    pub fn replace(&mut self, id: &str, mut draft: E) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                draft.keep_identity(slot);
                *slot = draft;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<E> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn search(&self, term: &str) -> Vec<E> {
        self.items
            .iter()
            .filter(|item| item.matches(term))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Customer, CustomerField, CustomerGroup};
    use std::collections::HashSet;

    fn joao() -> Customer {
        Customer {
            id: "1".into(),
            first_name: "João".into(),
            last_name: "Silva".into(),
            email: "joao.silva@email.com".into(),
            phone: "(11) 98765-4321".into(),
            birth_date: "1990-05-15".into(),
            address: Address {
                street: "Rua das Flores".into(),
                number: "123".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                ..Address::default()
            },
            group_ids: vec!["1".into()],
            created_at: "2024-03-15".into(),
            last_purchase: Some("2024-03-10".into()),
            total_purchases: 5,
        }
    }

    fn group(id: &str, name: &str) -> CustomerGroup {
        CustomerGroup {
            id: id.into(),
            name: name.into(),
            description: format!("grupo {}", name),
            created_at: "2024-03-15".into(),
        }
    }

    #[test]
    fn create_issues_unique_ids_even_when_generator_repeats() {
        let mut groups = Collection::new(vec![group("1", "VIP")]);
        let mut issued = vec!["1", "1", "2"].into_iter();
        let identity = groups.create(CustomerGroup::default(), || {
            Identity::new(issued.next().unwrap_or("3"), "2024-04-01")
        });
        assert_eq!(identity.id, "2");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.items()[1].created_at, "2024-04-01");

        for _ in 0..20 {
            groups.create(CustomerGroup::default(), Identity::fresh);
        }
        let ids: HashSet<&str> = groups.items().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids.len(), groups.len());
    }

    #[test]
    fn unchanged_edit_leaves_list_identical() {
        let mut groups = Collection::new(vec![group("1", "VIP"), group("2", "Varejo")]);
        let before = groups.clone();
        let draft = groups.get("1").cloned().unwrap();
        assert!(groups.replace("1", draft));
        assert_eq!(groups, before);
    }

    #[test]
    fn edit_keeps_position_and_identity() {
        let mut groups = Collection::new(vec![
            group("1", "VIP"),
            group("2", "Varejo"),
            group("3", "Empresarial"),
        ]);
        let mut draft = group("ignored", "Atacado");
        draft.created_at = "2099-01-01".into();
        assert!(groups.replace("2", draft));
        let edited = &groups.items()[1];
        assert_eq!(edited.id, "2");
        assert_eq!(edited.created_at, "2024-03-15");
        assert_eq!(edited.name, "Atacado");
        assert!(!groups.replace("missing", group("x", "x")));
    }

    #[test]
    fn removed_records_no_longer_match_search() {
        let mut customers = Collection::new(vec![joao()]);
        assert_eq!(customers.search("joao.silva").len(), 1);
        assert!(customers.remove("1").is_some());
        assert!(customers.search("joao.silva").is_empty());
        assert!(customers.search("João Silva").is_empty());
        assert!(customers.remove("1").is_none());
    }

    #[test]
    fn search_ignores_case_including_accents() {
        let customers = Collection::new(vec![joao()]);
        let upper = customers.search("JOÃO");
        let lower = customers.search("joão");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(customers.search("").len(), 1);
        assert!(customers.search("maria").is_empty());
    }

    #[test]
    fn nested_update_touches_only_the_leaf() {
        let original = joao();
        let field: CustomerField = "address.city".parse().unwrap();
        let updated = original.with_field(&field, "Rio".into()).unwrap();
        assert_eq!(updated.address.city, "Rio");
        assert_eq!(
            Address {
                city: original.address.city.clone(),
                ..updated.address.clone()
            },
            original.address
        );
        assert_eq!(updated.first_name, original.first_name);
        assert_eq!(original.address.city, "São Paulo");
    }
}
