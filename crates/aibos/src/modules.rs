use aibos_core::{AppModule, KernelConfig};
use aibos_inventory::StockStore;

/// The statically bundled modules, plus the stock ledger inventory runs on.
pub struct Bundle {
    pub stock: StockStore,
    pub modules: Vec<AppModule>,
}

/// Every bundled module the config enables, in boot order.
pub fn bundled(config: &KernelConfig) -> Bundle {
    let stock = StockStore::default();
    let all = vec![
        aibos_accounting::module(),
        aibos_inventory::module_with_store(&stock),
        aibos_sales::module(),
        aibos_purchases::module(),
        aibos_payroll::module(),
        aibos_helloworld::module(),
        aibos_listener_demo::module(),
    ];

    let modules = all
        .into_iter()
        .filter(|m| match m.id() {
            Some(id) => config.module_enabled(id),
            None => false,
        })
        .collect::<Vec<_>>();
    log::debug!("{} bundled module(s) enabled", modules.len());

    Bundle { stock, modules }
}
