use portaria_core::{
    CorrespondenceKind, CorrespondenceRepository, DeliveryStatus, MemoryStore,
};

const ARRIVED: &str = "2024-01-25T10:00:00.000Z";
const DELIVERED: &str = "2024-01-25T15:00:00.000Z";

#[test]
fn register_creates_waiting_item_without_delivered_at() {
    let store = MemoryStore::new();
    let repo = CorrespondenceRepository::new(&store);

    let item = repo
        .register("102", CorrespondenceKind::Package, "Encomenda X", ARRIVED)
        .unwrap();
    assert_eq!(item.status, DeliveryStatus::Waiting);
    assert!(item.delivered_at.is_none());
    assert!(item.id.starts_with("correspondence-"));
}

#[test]
fn mark_delivered_sets_terminal_state_exactly_once() {
    let store = MemoryStore::new();
    let repo = CorrespondenceRepository::new(&store);
    let item = repo
        .register("102", CorrespondenceKind::Letter, "Carta registrada", ARRIVED)
        .unwrap();

    repo.mark_delivered(&item.id, DELIVERED).unwrap();
    let stored = repo.get_all().unwrap();
    assert_eq!(stored[0].status, DeliveryStatus::Delivered);
    assert_eq!(stored[0].delivered_at.as_deref(), Some(DELIVERED));

    repo.mark_delivered(&item.id, "2024-01-26T09:00:00.000Z").unwrap();
    assert_eq!(repo.get_all().unwrap(), stored);
}

#[test]
fn mark_delivered_of_unknown_id_is_a_silent_noop() {
    let store = MemoryStore::new();
    let repo = CorrespondenceRepository::new(&store);
    repo.register("101", CorrespondenceKind::Other, "Chaves", ARRIVED)
        .unwrap();

    repo.mark_delivered("correspondence-missing", DELIVERED).unwrap();
    assert!(repo.get_all().unwrap()[0].is_waiting());
}

#[test]
fn insertion_order_is_preserved_across_updates() {
    let store = MemoryStore::new();
    let repo = CorrespondenceRepository::new(&store);
    let first = repo
        .register("101", CorrespondenceKind::Package, "Caixa", ARRIVED)
        .unwrap();
    let second = repo
        .register("102", CorrespondenceKind::FoodDelivery, "Jantar", ARRIVED)
        .unwrap();
    let third = repo
        .register("101", CorrespondenceKind::Letter, "Fatura", ARRIVED)
        .unwrap();

    repo.mark_delivered(&second.id, DELIVERED).unwrap();

    let ids: Vec<_> = repo.get_all().unwrap().into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}
