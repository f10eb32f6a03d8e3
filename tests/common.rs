//! Common test utilities for building inputs, modules and definitions.
use launchplan::prelude::*;

pub const DEPLOYER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
pub const BUYER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

/// Two accounts and a named `baseUri` parameter.
#[allow(dead_code)]
pub fn sample_inputs() -> StaticInputs {
    StaticInputs::new(vec![DEPLOYER.to_string(), BUYER.to_string()])
        .with_parameter("baseUri", "ipfs://tickets/")
}

/// Builds the single-action `TicketNFTModule`.
#[allow(dead_code)]
pub fn ticket_module(inputs: &StaticInputs, namespace: &mut Namespace) -> Module {
    let mut builder = Builder::new(inputs);
    let deployer = builder.account(0).expect("account 0 is available");
    let contract = builder
        .add_action("TicketNFT", [deployer])
        .expect("deploy is valid");
    builder
        .finalize(namespace, "TicketNFTModule", [("contract", contract)])
        .expect("finalize succeeds")
}

/// Builds a builder holding `count` independent deploy actions.
#[allow(dead_code)]
pub fn builder_with_actions<'a>(inputs: &'a StaticInputs, count: usize) -> Builder<'a> {
    let mut builder = Builder::new(inputs);
    for i in 0..count {
        builder
            .add_action(&format!("Entity{}", i), Vec::<Argument>::new())
            .expect("deploy is valid");
    }
    builder
}

/// A marketplace definition: a library, a token, a market wired to both, and a call.
#[allow(dead_code)]
pub const MARKET_DEFINITION_JSON: &str = r#"{
    "name": "MarketModule",
    "actions": [
        { "kind": "deploy-library", "target": "PriceMath" },
        { "target": "TicketNFT", "label": "ticket", "args": [{ "account": 0 }, { "parameter": "baseUri" }] },
        { "target": "Market", "args": [{ "ref": "ticket" }, { "literal": 250 }], "after": ["PriceMath"] },
        { "kind": "call", "target": "setMinter", "on": { "ref": "ticket" }, "args": [{ "ref": "Market" }] },
        { "kind": "static-call", "target": "limits", "label": "limits", "on": { "ref": "Market" }, "results": 2 }
    ],
    "outputs": {
        "ticket": { "ref": "ticket" },
        "market": { "ref": "Market" },
        "maxPerWallet": { "result": ["limits", 1] }
    }
}"#;
