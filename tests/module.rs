//! Tests for finalized modules: resolution, planning and catalog checks.
mod common;
use common::*;
use launchplan::prelude::*;
use std::sync::Arc;
use std::thread;

fn market_module(inputs: &StaticInputs, namespace: &mut Namespace) -> Module {
    let mut builder = Builder::new(inputs);
    let owner = builder.account(0).unwrap();
    let math = builder.add(ActionSpec::library("PriceMath")).unwrap();
    let ticket = builder
        .add(ActionSpec::deploy("TicketNFT").with_label("ticket").with_argument(owner))
        .unwrap();
    let market = builder
        .add(ActionSpec::deploy("Market").with_argument(ticket).after(math))
        .unwrap();
    builder
        .add(ActionSpec::call(ticket, "setMinter").with_argument(market))
        .unwrap();
    builder
        .finalize(
            namespace,
            "MarketModule",
            [("ticket", ticket), ("market", market), ("owner", owner)],
        )
        .unwrap()
}

#[test]
fn test_every_output_resolves() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = market_module(&inputs, &mut namespace);

    for (key, future) in module.outputs() {
        let resolved = module.resolve(future);
        assert!(resolved.is_ok(), "Output '{}' did not resolve", key);
    }

    match module.resolve(module.output("ticket").unwrap()).unwrap() {
        Resolved::Action { action, index } => {
            assert_eq!(action.label(), "ticket");
            assert_eq!(action.target(), "TicketNFT");
            assert_eq!(index, 0);
        }
        other => panic!("Expected an action, got {:?}", other),
    }
    assert_eq!(
        module.resolve(module.output("owner").unwrap()).unwrap(),
        Resolved::Static {
            kind: InputKind::Account,
            index: 0,
        }
    );
}

#[test]
fn test_resolve_rejects_foreign_values() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = ticket_module(&inputs, &mut namespace);

    let mut other = Builder::new(&inputs);
    let foreign = other.add_action("TicketNFT", Vec::<Argument>::new()).unwrap();
    assert!(matches!(
        module.resolve(&foreign),
        Err(BuildError::UnknownReference { .. })
    ));
}

#[test]
fn test_dependencies_and_batches() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = market_module(&inputs, &mut namespace);

    let market = module.find("Market").unwrap();
    assert_eq!(market.dependencies(), vec![ActionId(1), ActionId(0)]);

    let set_minter = module.find("setMinter").unwrap();
    assert_eq!(set_minter.kind(), ActionKind::Call);
    assert_eq!(set_minter.dependencies(), vec![ActionId(1), ActionId(2)]);

    assert_eq!(
        module.batches(),
        vec![
            vec![ActionId(0), ActionId(1)],
            vec![ActionId(2)],
            vec![ActionId(3)],
        ]
    );
    assert_eq!(module.dependents(ActionId(1)), vec![ActionId(2), ActionId(3)]);
}

#[test]
fn test_references_only_point_backwards() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = market_module(&inputs, &mut namespace);

    for action in module.actions() {
        for dep in action.dependencies() {
            assert!(dep < action.id());
        }
    }
}

#[test]
fn test_display_ids() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = market_module(&inputs, &mut namespace);

    let ids: Vec<String> = module
        .actions()
        .iter()
        .map(|a| a.display_id(module.name()))
        .collect();
    assert_eq!(
        ids,
        vec![
            "MarketModule#PriceMath",
            "MarketModule#ticket",
            "MarketModule#Market",
            "MarketModule#setMinter",
        ]
    );
}

#[test]
fn test_unresolved_targets() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = market_module(&inputs, &mut namespace);

    let catalog = StaticCatalog::new()
        .with_entity("PriceMath", Some(0))
        .with_entity("TicketNFT", Some(1));

    let missing: Vec<&str> = module
        .unresolved_targets(&catalog)
        .iter()
        .map(|a| a.target())
        .collect();
    // `setMinter` is a function name and is never looked up.
    assert_eq!(missing, vec!["Market"]);

    let full = catalog.with_entity("Market", Some(1));
    assert!(module.unresolved_targets(&full).is_empty());
}

#[test]
fn test_catalog_from_json() {
    let catalog = StaticCatalog::from_json(
        r#"[{ "name": "TicketNFT", "constructor_inputs": 1 }, { "name": "Market" }]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.resolve_target("TicketNFT"),
        Some(EntityDescriptor {
            name: "TicketNFT".to_string(),
            constructor_inputs: Some(1),
        })
    );
    assert_eq!(catalog.resolve_target("Market").unwrap().constructor_inputs, None);
    assert!(catalog.resolve_target("Unknown").is_none());

    assert!(matches!(
        StaticCatalog::from_json("{ not json"),
        Err(InputError::Load(_))
    ));
}

#[test]
fn test_module_shared_across_threads() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = Arc::new(market_module(&inputs, &mut namespace));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let module = Arc::clone(&module);
            thread::spawn(move || module.batches().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}

#[test]
fn test_plan_formatter() {
    let inputs = sample_inputs();
    let mut namespace = Namespace::new();
    let module = ticket_module(&inputs, &mut namespace);

    let plan = PlanFormatter::format_plan(&module);
    assert_eq!(
        plan,
        "Module TicketNFTModule (1 action)\n\
         \x20 Batch 1:\n\
         \x20   TicketNFTModule#TicketNFT  deploy-entity TicketNFT(account[0])\n\
         \x20 Outputs:\n\
         \x20   contract = TicketNFTModule#TicketNFT\n"
    );
}
