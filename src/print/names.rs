//! Names of well-known object identifiers.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::oid::{ConstOid, Oid};


/// Returns the name of the object identifier with the given content octets.
pub fn oid_name(content: &[u8]) -> Option<&'static str> {
    OID_NAMES.iter().find(|item| {
        item.0.as_ref() == content
    }).map(|item| item.1)
}


//------------ OID_NAMES -----------------------------------------------------

/// Object identifiers commonly found in certificates and related
/// structures.
///
/// This covers hash and signature algorithms, elliptic curves, X.509
/// attributes and extensions, and the PKIX, PKCS #7 and PKCS #9 arcs.
pub static OID_NAMES: &[(ConstOid, &str)] = &[
    // 1.3.132.0.33
    (Oid(&[43, 129, 4, 0, 33]), "secp224r1"),
    // 1.2.840.10045.3.1.7
    (Oid(&[42, 134, 72, 206, 61, 3, 1, 7]), "secp256r1"),
    // 1.3.132.0.34
    (Oid(&[43, 129, 4, 0, 34]), "secp384r1"),
    // 1.3.132.0.35
    (Oid(&[43, 129, 4, 0, 35]), "secp521r1"),
    // 1.2.840.10045.1.1
    (Oid(&[42, 134, 72, 206, 61, 1, 1]), "prime-field"),
    // 1.2.840.10045.1.2
    (Oid(&[42, 134, 72, 206, 61, 1, 2]), "characteristic-two-field"),
    // 1.2.840.10045.1.2.3.1
    (Oid(&[42, 134, 72, 206, 61, 1, 2, 3, 1]), "gnBasis"),
    // 1.2.840.10045.1.2.3.2
    (Oid(&[42, 134, 72, 206, 61, 1, 2, 3, 2]), "tpBasis"),
    // 1.2.840.10045.1.2.3.3
    (Oid(&[42, 134, 72, 206, 61, 1, 2, 3, 3]), "ppBasis"),
    // 1.2.840.113549.2.2
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 2]), "md2"),
    // 1.2.840.113549.2.4
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 4]), "md4"),
    // 1.2.840.113549.2.5
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 5]), "md5"),
    // 1.3.14.3.2.26
    (Oid(&[43, 14, 3, 2, 26]), "sha1"),
    // 2.16.840.1.101.3.4.2.4
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 4]), "sha224"),
    // 2.16.840.1.101.3.4.2.1
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 1]), "sha256"),
    // 2.16.840.1.101.3.4.2.2
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 2]), "sha384"),
    // 2.16.840.1.101.3.4.2.3
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 3]), "sha512"),
    // 1.2.840.113549.1.1.8
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 8]), "mgf1"),
    // 1.2.840.113549.1.1.1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 1]), "rsaEncryption"),
    // 1.2.840.113549.1.1.10
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 10]), "rsassa-pss"),
    // 1.2.840.10045.2.1
    (Oid(&[42, 134, 72, 206, 61, 2, 1]), "ecPublicKey"),
    // 1.2.840.10040.4.1
    (Oid(&[42, 134, 72, 206, 56, 4, 1]), "dsa"),
    // 1.3.101.110
    (Oid(&[43, 101, 110]), "x25519"),
    // 1.3.101.111
    (Oid(&[43, 101, 111]), "x448"),
    // 1.2.840.113549.1.1.2
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 2]), "md2WithRSAEncryption"),
    // 1.2.840.113549.1.1.3
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 3]), "md4WithRSAEncryption"),
    // 1.2.840.113549.1.1.4
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 4]), "md5WithRSAEncryption"),
    // 1.2.840.113549.1.1.5
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 5]), "sha1WithRSAEncryption"),
    // 1.2.840.113549.1.1.14
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 14]), "sha224WithRSAEncryption"),
    // 1.2.840.113549.1.1.11
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 11]), "sha256WithRSAEncryption"),
    // 1.2.840.113549.1.1.12
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 12]), "sha384WithRSAEncryption"),
    // 1.2.840.113549.1.1.13
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 1, 13]), "sha512WithRSAEncryption"),
    // 1.2.840.10040.4.3
    (Oid(&[42, 134, 72, 206, 56, 4, 3]), "dsa-with-sha1"),
    // 2.16.840.1.101.3.4.3.1
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 3, 1]), "dsa-with-sha224"),
    // 2.16.840.1.101.3.4.3.2
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 3, 2]), "dsa-with-sha256"),
    // 1.2.840.10045.4.1
    (Oid(&[42, 134, 72, 206, 61, 4, 1]), "ecdsa-with-SHA1"),
    // 1.2.840.10045.4.3.1
    (Oid(&[42, 134, 72, 206, 61, 4, 3, 1]), "ecdsa-with-SHA224"),
    // 1.2.840.10045.4.3.2
    (Oid(&[42, 134, 72, 206, 61, 4, 3, 2]), "ecdsa-with-SHA256"),
    // 1.2.840.10045.4.3.3
    (Oid(&[42, 134, 72, 206, 61, 4, 3, 3]), "ecdsa-with-SHA384"),
    // 1.2.840.10045.4.3.4
    (Oid(&[42, 134, 72, 206, 61, 4, 3, 4]), "ecdsa-with-SHA512"),
    // 1.3.101.112
    (Oid(&[43, 101, 112]), "ed25519"),
    // 1.3.101.113
    (Oid(&[43, 101, 113]), "ed448"),
    // 1.3.6.1.5.5.7.1.1
    (Oid(&[43, 6, 1, 5, 5, 7, 1, 1]), "authorityInfoAccess"),
    // 1.3.6.1.5.5.7.1.7
    (Oid(&[43, 6, 1, 5, 5, 7, 1, 7]), "ipAddrBlocks"),
    // 1.3.6.1.5.5.7.1.8
    (Oid(&[43, 6, 1, 5, 5, 7, 1, 8]), "autonomousSysIds"),
    // 1.3.6.1.5.5.7.1.11
    (Oid(&[43, 6, 1, 5, 5, 7, 1, 11]), "subjectInfoAccess"),
    // 1.3.6.1.5.5.7.1.28
    (Oid(&[43, 6, 1, 5, 5, 7, 1, 28]), "ipAddrBlocks-v2"),
    // 1.3.6.1.5.5.7.1.29
    (Oid(&[43, 6, 1, 5, 5, 7, 1, 29]), "autonomousSysIds-v2"),
    // 2.5.29.9
    (Oid(&[85, 29, 9]), "subjectDirectoryAttributes"),
    // 2.5.29.14
    (Oid(&[85, 29, 14]), "subjectKeyIdentifier"),
    // 2.5.29.15
    (Oid(&[85, 29, 15]), "keyUsage"),
    // 2.5.29.16
    (Oid(&[85, 29, 16]), "privateKeyUsagePeriod"),
    // 2.5.29.17
    (Oid(&[85, 29, 17]), "subjectAltName"),
    // 2.5.29.18
    (Oid(&[85, 29, 18]), "issuerAltName"),
    // 2.5.29.19
    (Oid(&[85, 29, 19]), "basicConstraints"),
    // 2.5.29.20
    (Oid(&[85, 29, 20]), "cRLNumber"),
    // 2.5.29.21
    (Oid(&[85, 29, 21]), "reasonCode"),
    // 2.5.29.23
    (Oid(&[85, 29, 23]), "instructionCode"),
    // 2.5.29.24
    (Oid(&[85, 29, 24]), "invalidityDate"),
    // 2.5.29.27
    (Oid(&[85, 29, 27]), "deltaCRLIndicator"),
    // 2.5.29.28
    (Oid(&[85, 29, 28]), "issuingDistributionPoint"),
    // 2.5.29.29
    (Oid(&[85, 29, 29]), "certificateIssuer"),
    // 2.5.29.30
    (Oid(&[85, 29, 30]), "nameConstraints"),
    // 2.5.29.31
    (Oid(&[85, 29, 31]), "cRLDistributionPoints"),
    // 2.5.29.32
    (Oid(&[85, 29, 32]), "certificatePolicies"),
    // 2.5.29.33
    (Oid(&[85, 29, 33]), "policyMappings"),
    // 2.5.29.35
    (Oid(&[85, 29, 35]), "authorityKeyIdentifier"),
    // 2.5.29.36
    (Oid(&[85, 29, 36]), "policyConstraints"),
    // 2.5.29.37
    (Oid(&[85, 29, 37]), "extKeyUsage"),
    // 2.5.29.46
    (Oid(&[85, 29, 46]), "freshestCRL"),
    // 2.5.29.54
    (Oid(&[85, 29, 54]), "inhibitAnyPolicy"),
    // 1.3.6.1.5.5.7.3.1
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 1]), "serverAuth"),
    // 1.3.6.1.5.5.7.3.2
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 2]), "clientAuth"),
    // 1.3.6.1.5.5.7.3.3
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 3]), "codeSigning"),
    // 1.3.6.1.5.5.7.3.4
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 4]), "emailProtection"),
    // 1.3.6.1.5.5.7.3.8
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 8]), "timeStamping"),
    // 1.3.6.1.5.5.7.3.9
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 9]), "OCSPSigning"),
    // 1.3.6.1.5.5.7.3.30
    (Oid(&[43, 6, 1, 5, 5, 7, 3, 30]), "bgpsec-router"),
    // 2.5.29.37.0
    (Oid(&[85, 29, 37, 0]), "anyExtendedKeyUsage"),
    // 1.3.6.1.5.5.7.2.2
    (Oid(&[43, 6, 1, 5, 5, 7, 2, 2]), "unotice"),
    // 1.3.6.1.5.5.7.14.2
    (Oid(&[43, 6, 1, 5, 5, 7, 14, 2]), "ipAddr-asNumber"),
    // 1.3.6.1.5.5.7.14.3
    (Oid(&[43, 6, 1, 5, 5, 7, 14, 3]), "ipAddr-asNumber-v2"),
    // 2.5.29.32.0
    (Oid(&[85, 29, 32, 0]), "anyPolicy"),
    // 2.23.140.1.2.1
    (Oid(&[103, 129, 12, 1, 2, 1]), "domain-validated"),
    // 2.23.140.1.2.2
    (Oid(&[103, 129, 12, 1, 2, 2]), "organization-validated"),
    // 2.23.140.1.2.3
    (Oid(&[103, 129, 12, 1, 2, 3]), "individual-validated"),
    // 1.3.6.1.5.5.7.48.1
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 1]), "ocsp"),
    // 1.3.6.1.5.5.7.48.2
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 2]), "caIssuers"),
    // 1.3.6.1.5.5.7.48.5
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 5]), "caRepository"),
    // 1.3.6.1.5.5.7.48.10
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 10]), "rpkiManifest"),
    // 1.3.6.1.5.5.7.48.11
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 11]), "signedObject"),
    // 1.3.6.1.5.5.7.48.13
    (Oid(&[43, 6, 1, 5, 5, 7, 48, 13]), "rpkiNotify"),
    // 1.2.840.113549.1.9.1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 1]), "emailAddress"),
    // 1.2.840.113549.1.9.2
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 2]), "unstructuredName"),
    // 1.2.840.113549.1.9.3
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 3]), "contentType"),
    // 1.2.840.113549.1.9.4
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 4]), "messageDigest"),
    // 1.2.840.113549.1.9.5
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 5]), "signingTime"),
    // 1.2.840.113549.1.9.6
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 6]), "counterSignature"),
    // 1.2.840.113549.1.9.7
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 7]), "challengePassword"),
    // 1.2.840.113549.1.9.8
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 8]), "unstructuredAddress"),
    // 1.2.840.113549.1.9.9
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 9]),
        "extendedCertificateAttributes"
    ),
    // 1.2.840.113549.1.9.10
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 10]), "issuerAndSerialNumber"),
    // 1.2.840.113549.1.9.11
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 11]), "passwordCheck"),
    // 1.2.840.113549.1.9.12
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 12]), "publicKey"),
    // 1.2.840.113549.1.9.13
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 13]), "signingDescription"),
    // 1.2.840.113549.1.9.14
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 14]), "extensionRequest"),
    // 1.2.840.113549.1.9.15
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 15]), "smimeCapabilities"),
    // 1.2.840.113549.1.9.20
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 20]), "friendlyName"),
    // 1.2.840.113549.1.9.21
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 21]), "localKeyId"),
    // 2.5.4.3
    (Oid(&[85, 4, 3]), "commonName"),
    // 2.5.4.5
    (Oid(&[85, 4, 5]), "serialNumber"),
    // 2.5.4.6
    (Oid(&[85, 4, 6]), "countryName"),
    // 2.5.4.7
    (Oid(&[85, 4, 7]), "localityName"),
    // 2.5.4.8
    (Oid(&[85, 4, 8]), "stateOrProvinceName"),
    // 2.5.4.9
    (Oid(&[85, 4, 9]), "streetAddress"),
    // 2.5.4.10
    (Oid(&[85, 4, 10]), "organizationName"),
    // 2.5.4.11
    (Oid(&[85, 4, 11]), "organizationUnitName"),
    // 2.5.4.12
    (Oid(&[85, 4, 12]), "title"),
    // 2.5.4.17
    (Oid(&[85, 4, 17]), "postalCode"),
    // 1.2.840.113549.1.9.16.2.1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 1]), "receiptRequest"),
    // 1.2.840.113549.1.9.16.2.2
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 2]), "securityLabel"),
    // 1.2.840.113549.1.9.16.2.3
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 3]), "mlExpandHistory"),
    // 1.2.840.113549.1.9.16.2.4
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 4]), "contentHint"),
    // 1.2.840.113549.1.9.16.2.5
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 5]), "msgSigDigest"),
    // 1.2.840.113549.1.9.16.2.7
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 7]), "contentIdentifier"),
    // 1.2.840.113549.1.9.16.2.9
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 9]), "equivalentLabels"),
    // 1.2.840.113549.1.9.16.2.10
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 10]), "contentReference"),
    // 1.2.840.113549.1.9.16.2.11
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 11]), "encrypKeyPref"),
    // 1.2.840.113549.1.9.16.2.12
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 2, 12]),
        "signingCertificate"
    ),
    // 1.2.840.113549.1.9.16.11.1
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 11, 1]),
        "preferBinaryInside"
    ),
    // 1.2.840.113549.1.7.1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 1]), "data"),
    // 1.2.840.113549.1.7.2
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 2]), "signedData"),
    // 1.2.840.113549.1.7.3
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 3]), "envelopedData"),
    // 1.2.840.113549.1.7.4
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 4]), "signedAndEnvelopedData"),
    // 1.2.840.113549.1.7.5
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 5]), "digestedData"),
    // 1.2.840.113549.1.7.6
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 7, 6]), "encryptedData"),
    // 1.2.840.113549.1.9.16.1.1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 1]), "receipt"),
    // 1.2.840.113549.1.9.16.1.2
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 2]), "authData"),
    // 1.2.840.113549.1.9.16.1.6
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 6]), "contentInfo"),
    // 1.2.840.113549.1.9.16.1.24
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 24]), "routeOriginAuthz"),
    // 1.2.840.113549.1.9.16.1.26
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 26]), "rpkiManifest"),
    // 1.2.840.113549.1.9.16.1.35
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 35]), "rpkiGhostbusters"),
    // 1.2.840.113549.1.9.16.1.47
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 47]),
        "geofeedCSVwithCRLF"
    ),
    // 1.2.840.113549.1.9.16.1.48
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 48]), "signedChecklist"),
    // 1.2.840.113549.1.9.16.1.49
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 49]), "ASPA"),
    // 1.2.840.113549.1.9.16.1.50
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 9, 16, 1, 50]), "signedTAL"),
    // 1.2.840.113549.1.12.10.1.1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 10, 1, 1]), "keyBag"),
    // 1.2.840.113549.1.12.10.1.2
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 10, 1, 2]),
        "pkcs-8ShroudedKeyBag"
    ),
    // 1.2.840.113549.1.12.10.1.3
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 10, 1, 3]), "certBag"),
    // 1.2.840.113549.1.12.10.1.4
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 10, 1, 4]), "crlBag"),
    // 1.2.840.113549.1.12.10.1.5
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 10, 1, 5]), "secretBag"),
    // 1.2.840.113549.1.12.10.1.6
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 10, 1, 6]), "safeContentsBag"),
    // 1.2.840.113549.1.12.1.1
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 1, 1]),
        "pbeWithSHAAnd128BitRC4"
    ),
    // 1.2.840.113549.1.12.1.2
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 1, 2]), "pbeWithSHAAnd40BitRC4"),
    // 1.2.840.113549.1.12.1.3
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 1, 3]),
        "pbeWithSHAAnd3-KeyTripleDES-CBC"
    ),
    // 1.2.840.113549.1.12.1.4
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 1, 4]),
        "pbeWithSHAAnd2-KeyTripleDES-CBC"
    ),
    // 1.2.840.113549.1.12.1.5
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 1, 5]),
        "pbeWithSHAAnd128BitRC2-CBC"
    ),
    // 1.2.840.113549.1.12.1.6
    (
        Oid(&[42, 134, 72, 134, 247, 13, 1, 12, 1, 6]),
        "pbewithSHAAnd40BitRC2-CBC"
    ),
    // 1.3.6.1.4.1.11129.2.4.2
    (Oid(&[43, 6, 1, 4, 1, 214, 121, 2, 4, 2]), "embeddedSCTList"),
    // 1.3.6.1.4.1.11129.2.4.3
    (Oid(&[43, 6, 1, 4, 1, 214, 121, 2, 4, 3]), "ctPoison"),
    // 1.3.6.1.4.1.11129.2.4.4
    (Oid(&[43, 6, 1, 4, 1, 214, 121, 2, 4, 4]), "ctPrecertificateSigning"),
    // 1.3.6.1.4.1.11129.2.4.5
    (Oid(&[43, 6, 1, 4, 1, 214, 121, 2, 4, 5]), "ocspSCTList"),
    // 1.2.840.113549.1.5.1
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 1]), "pbeWithMD2AndDES-CBC"),
    // 1.2.840.113549.1.5.3
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 3]), "pbeWithMD5AndDES-CBC"),
    // 1.2.840.113549.1.5.4
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 4]), "pbeWithMD2AndRC2-CBC"),
    // 1.2.840.113549.1.5.6
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 6]), "pbeWithMD5AndRC2-CBC"),
    // 1.2.840.113549.1.5.10
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 10]), "pbeWithSHA1AndDES-CBC"),
    // 1.2.840.113549.1.5.11
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 11]), "pbeWithSHA1AndRC2-CBC"),
    // 1.2.840.113549.1.5.12
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 12]), "PBKDF2"),
    // 1.2.840.113549.1.5.13
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 13]), "PBES2"),
    // 1.2.840.113549.1.5.14
    (Oid(&[42, 134, 72, 134, 247, 13, 1, 5, 14]), "PBMAC1"),
    // 1.2.840.113549.2.7
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 7]), "hmacWithSHA1"),
    // 1.2.840.113549.2.8
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 8]), "hmacWithSHA224"),
    // 1.2.840.113549.2.9
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 9]), "hmacWithSHA256"),
    // 1.2.840.113549.2.10
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 10]), "hmacWithSHA384"),
    // 1.2.840.113549.2.11
    (Oid(&[42, 134, 72, 134, 247, 13, 2, 11]), "hmacWithSHA512"),
    // 1.2.840.113549.3.2
    (Oid(&[42, 134, 72, 134, 247, 13, 3, 2]), "RC2-CBC"),
    // 1.2.840.113549.3.7
    (Oid(&[42, 134, 72, 134, 247, 13, 3, 7]), "DES-EDE3-CBC"),
    // 1.2.840.113549.3.9
    (Oid(&[42, 134, 72, 134, 247, 13, 3, 9]), "RC5-CBC-Pad"),
    // 2.16.840.1.101.3.4.1.2
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 1, 2]), "AES-128-CBC"),
    // 2.16.840.1.101.3.4.1.22
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 1, 22]), "AES-192-CBC"),
    // 2.16.840.1.101.3.4.1.42
    (Oid(&[96, 134, 72, 1, 101, 3, 4, 1, 42]), "AES-256-CBC"),
];


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(
            oid_name(b"\x2a\x86\x48\x86\xf7\x0d\x01\x01\x0b"),
            Some("sha256WithRSAEncryption")
        );
        assert_eq!(oid_name(b"\x55\x1d\x13"), Some("basicConstraints"));
        assert_eq!(oid_name(b"\x55\x1d"), None);
        assert_eq!(oid_name(b""), None);
    }

    #[test]
    fn table_is_valid() {
        for (oid, name) in OID_NAMES {
            assert!(oid.arcs().is_ok(), "{}", name);
        }
    }
}
