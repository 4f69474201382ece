//! Inline DrugBank XML documents

use std::path::{Path, PathBuf};

/// One approved and one experimental drug sharing a single target.
pub const APPROVAL_SCENARIO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<drugbank xmlns="http://www.drugbank.ca" version="4.1">
  <drug type="biotech">
    <drugbank-id primary="true">DB00001</drugbank-id>
    <drugbank-id>BIOD00024</drugbank-id>
    <name>Lepirudin</name>
    <cas-number>138068-37-8</cas-number>
    <indication>For the treatment of heparin-induced thrombocytopenia</indication>
    <groups><group>approved</group></groups>
    <categories>
      <category><category>Antithrombins</category><mesh-id>D000991</mesh-id></category>
      <category><category>Anticoagulants</category><mesh-id>D000925</mesh-id></category>
    </categories>
    <targets>
      <target position="1">
        <id>BE0000048</id>
        <name>Prothrombin</name>
        <organism>Human</organism>
        <polypeptide id="P00734" source="Swiss-Prot">
          <name>Prothrombin</name>
          <gene-name>F2</gene-name>
          <external-identifiers>
            <external-identifier><resource>HUGO Gene Nomenclature Committee (HGNC)</resource><identifier>HGNC:3535</identifier></external-identifier>
            <external-identifier><resource>UniProtKB</resource><identifier>P00734</identifier></external-identifier>
          </external-identifiers>
        </polypeptide>
      </target>
    </targets>
  </drug>
  <drug type="small molecule">
    <drugbank-id primary="true">DB00002</drugbank-id>
    <name>Trialin</name>
    <cas-number></cas-number>
    <groups><group>experimental</group></groups>
    <targets>
      <target position="1">
        <id>BE0000048</id>
        <name>Prothrombin</name>
        <organism>Human</organism>
        <polypeptide id="P00734" source="Swiss-Prot">
          <gene-name>F2</gene-name>
          <external-identifiers>
            <external-identifier><resource>UniProtKB</resource><identifier>P00734</identifier></external-identifier>
          </external-identifiers>
        </polypeptide>
      </target>
    </targets>
  </drug>
</drugbank>
"#;

/// Duplicate drug ids, nested drug references, a structure key, a target
/// without a polypeptide and a drug without targets.
pub const RICH_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<drugbank xmlns="http://www.drugbank.ca">
  <drug>
    <drugbank-id primary="true">DB00010</drugbank-id>
    <name>Cardiorenal</name>
    <cas-number>50-78-2</cas-number>
    <groups><group>approved</group><group>investigational</group></groups>
    <categories>
      <category><category>Renal</category></category>
      <category><category>Cardiac</category></category>
    </categories>
    <calculated-properties>
      <property><kind>logP</kind><value>1.19</value></property>
      <property><kind>InChIKey</kind><value>InChIKey=BSYNRYMUTXBXSQ-UHFFFAOYSA-N</value></property>
    </calculated-properties>
    <drug-interactions>
      <drug-interaction>
        <drug>DB00002</drug>
        <name>Trialin</name>
      </drug-interaction>
    </drug-interactions>
    <targets>
      <target>
        <id>BE0000100</id>
        <name>Receptor complex</name>
        <organism>Human</organism>
      </target>
      <target>
        <id>BE0000048</id>
        <name>Prothrombin</name>
        <organism>Human</organism>
        <polypeptide>
          <gene-name>F2</gene-name>
          <external-identifiers>
            <external-identifier><resource>UniProtKB</resource><identifier>P00734</identifier></external-identifier>
          </external-identifiers>
        </polypeptide>
      </target>
    </targets>
  </drug>
  <drug>
    <drugbank-id primary="true">DB00010</drugbank-id>
    <name>Cardiorenal (duplicate)</name>
    <cas-number/>
  </drug>
  <drug>
    <drugbank-id primary="true">DB00020</drugbank-id>
    <name>Orphan</name>
    <cas-number/>
    <groups><group>withdrawn</group></groups>
  </drug>
</drugbank>
"#;

/// A drug without its required name.
pub const MALFORMED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<drugbank xmlns="http://www.drugbank.ca">
  <drug>
    <drugbank-id primary="true">DB00001</drugbank-id>
    <cas-number/>
  </drug>
</drugbank>
"#;

/// Write a fixture document into `dir`, returning its path
pub fn write_fixture(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, xml).expect("write fixture");
    path
}
