use super::*;

fn returns_owned_view<F, P, V>(_component: F)
where
    F: Fn(P) -> V,
    V: IntoView + 'static,
{
}

#[test]
fn guard_components_do_not_borrow_their_props() {
    // Route views must be 'static; a region borrowing its session prop could
    // not be handed to `<Route view=...>`.
    returns_owned_view(ProtectedRoute);
    returns_owned_view(PublicRoute);
}
