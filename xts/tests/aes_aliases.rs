use hex_literal::hex;
use xts::{get_tweak_default, XtsAes128Dec, XtsAes128Enc, XtsAes256Dec, XtsAes256Enc};

#[test]
fn aes_key_pair_aliases() {
    let tweak = get_tweak_default(0x33_3333_3333);
    let mut buf = [0x44u8; 32];
    let key = hex!("11111111111111111111111111111111 22222222222222222222222222222222");
    XtsAes128Enc::new_from_slice(&key)
        .unwrap()
        .encrypt_message(&tweak, &mut buf)
        .unwrap();
    assert_eq!(
        buf,
        hex!("c454185e6a16936e39334038acef838bfb186fff7480adc4289382ecd6d394f0")
    );
    XtsAes128Dec::new_from_slice(&key)
        .unwrap()
        .decrypt_message(&tweak, &mut buf)
        .unwrap();
    assert_eq!(buf, [0x44u8; 32]);

    let key = [0x5au8; 64];
    let mut buf = [0x01u8; 33];
    XtsAes256Enc::new_from_slice(&key)
        .unwrap()
        .encrypt_message(&tweak, &mut buf)
        .unwrap();
    XtsAes256Dec::new_from_slice(&key)
        .unwrap()
        .decrypt_message(&tweak, &mut buf)
        .unwrap();
    assert_eq!(buf, [0x01u8; 33]);
}
