//! End-to-end exercises of the transaction pipeline: build an invocation,
//! sign it, serialize, and read it back.

use ont_core::{Address, Fee, InvokeCode, Payload, Transaction, TxType};
use ont_crypto::KeyPair;
use ont_io::{Serializable, SerializableExt};
use ont_vm::ScriptValue;

use proptest::prelude::*;

fn contract_call() -> Transaction {
    let contract = Address::from_program_hash([0x42; 20]);
    let payload = InvokeCode::for_contract_call(
        &contract,
        "transfer",
        &[
            ScriptValue::Address([0x01; 20]),
            ScriptValue::Address([0x02; 20]),
            ScriptValue::Int(500),
        ],
    );
    Transaction::invoke(payload)
}

#[test]
fn signed_contract_call_round_trips() {
    let sender = KeyPair::generate();
    let mut tx = contract_call();
    tx.fees
        .push(Fee::new(1000, Address::from_public_key(sender.public_key())));
    tx.sign(&sender).unwrap();

    let restored = Transaction::from_array(&tx.to_array().unwrap()).unwrap();
    assert_eq!(restored, tx);
    assert_eq!(restored.hash().unwrap(), tx.hash().unwrap());
}

#[test]
fn program_signature_verifies_against_unsigned_bytes() {
    let sender = KeyPair::generate();
    let mut tx = contract_call();
    tx.sign(&sender).unwrap();

    let message = tx.unsigned_bytes().unwrap();
    let program = &tx.programs[0];
    assert!(sender
        .public_key()
        .verify(&message, &program.signature)
        .unwrap());
}

#[test]
fn hex_form_parses_back() {
    let mut tx = contract_call();
    tx.sign(&KeyPair::generate()).unwrap();

    let encoded = tx.to_hex().unwrap();
    let bytes = hex::decode(&encoded).unwrap();
    assert_eq!(Transaction::from_array(&bytes).unwrap(), tx);
}

#[test]
fn two_signers_append_in_call_order() {
    let first = KeyPair::generate();
    let second = KeyPair::generate();
    let mut tx = contract_call();
    tx.sign(&first).unwrap();
    tx.sign(&second).unwrap();

    assert_eq!(tx.programs.len(), 2);
    assert_eq!(
        tx.programs[0].public_key,
        first.public_key().to_compressed().to_vec()
    );
    assert_eq!(
        tx.programs[1].public_key,
        second.public_key().to_compressed().to_vec()
    );
}

proptest! {
    #[test]
    fn arbitrary_invoke_payloads_round_trip(
        code in proptest::collection::vec(any::<u8>(), 0..512),
        nonce in any::<u32>(),
        network_fee in any::<u64>(),
    ) {
        let mut tx = Transaction::invoke(InvokeCode::from_code(code));
        tx.nonce = nonce;
        tx.network_fee = network_fee;

        let restored = Transaction::from_array(&tx.to_array().unwrap()).unwrap();
        prop_assert_eq!(restored, tx);
    }

    #[test]
    fn truncated_transactions_never_panic(cut in 0usize..64) {
        let tx = contract_call();
        let bytes = tx.unsigned_bytes().unwrap();
        let cut = cut.min(bytes.len());
        let _ = Transaction::from_array(&bytes[..bytes.len() - cut]);
    }
}

#[test]
fn type_tag_mapping() {
    assert_eq!(TxType::from_byte(0xD0), TxType::Deploy);
    assert_eq!(TxType::from_byte(0xD1), TxType::Invoke);
    assert_eq!(TxType::from_byte(0x00), TxType::Other(0x00));
    assert_eq!(TxType::Other(0xD5).byte(), 0xD5);
}

#[test]
fn payload_size_matches_serialization() {
    let tx = contract_call();
    match &tx.payload {
        Payload::Invoke(invoke) => {
            assert_eq!(invoke.to_array().unwrap().len(), invoke.size());
        }
        Payload::Deploy(_) => unreachable!(),
    }
}
